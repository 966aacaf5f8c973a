//! Fixed-width flag sets over dense flag spaces.
//!
//! Object properties ([`ObjectFlag`]) and creature properties ([`MonsterFlag`])
//! are both dense enumerations starting at zero. A [`FlagSet`] stores one bit
//! per flag in a fixed array of words, so set/test are O(1) and every scan is
//! bounded by the width of the flag space.
//!
//! Higher layers never index flags one by one; they walk a set with
//! [`FlagSet::next_set`] (or its iterator wrapper) in ascending order.

pub mod kind;
pub mod monster;
pub mod object;

use core::fmt;
use core::marker::PhantomData;
use core::ops::{BitAnd, BitOr};

pub use kind::{FlagKind, FlagKinds};
pub use monster::MonsterFlag;
pub use object::ObjectFlag;

/// Number of 64-bit words backing a [`FlagSet`].
pub const FLAG_WORDS: usize = 2;

/// Largest flag space a [`FlagSet`] can hold.
pub const FLAG_CAPACITY: usize = FLAG_WORDS * 64;

/// A dense flag identifier space `[0, MAX)`.
pub trait Flag: Copy + Eq + core::hash::Hash + fmt::Debug + 'static {
    /// Number of flags in the space.
    const MAX: usize;

    /// Position of this flag in the space.
    fn index(self) -> usize;

    /// Flag at `index`, or `None` outside `[0, MAX)`.
    fn from_index(index: usize) -> Option<Self>;
}

/// A set of flags drawn from one flag space.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagSet<F: Flag> {
    words: [u64; FLAG_WORDS],
    space: PhantomData<F>,
}

impl<F: Flag> FlagSet<F> {
    const FITS: () = assert!(F::MAX <= FLAG_CAPACITY, "flag space exceeds FlagSet capacity");

    /// Creates a set with no flags.
    pub const fn empty() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS;
        Self {
            words: [0; FLAG_WORDS],
            space: PhantomData,
        }
    }

    /// Creates a set holding exactly `flags`.
    pub fn from_flags(flags: &[F]) -> Self {
        flags.iter().copied().collect()
    }

    #[inline]
    fn locate(flag: F) -> (usize, u64) {
        let index = flag.index();
        (index / 64, 1u64 << (index % 64))
    }

    /// Turns `flag` on. Returns `true` if it was previously off.
    pub fn set(&mut self, flag: F) -> bool {
        let (word, bit) = Self::locate(flag);
        let was_off = self.words[word] & bit == 0;
        self.words[word] |= bit;
        was_off
    }

    /// Turns `flag` off. Returns `true` if it was previously on.
    pub fn clear(&mut self, flag: F) -> bool {
        let (word, bit) = Self::locate(flag);
        let was_on = self.words[word] & bit != 0;
        self.words[word] &= !bit;
        was_on
    }

    /// Returns whether `flag` is on.
    #[inline]
    pub fn test(&self, flag: F) -> bool {
        let (word, bit) = Self::locate(flag);
        self.words[word] & bit != 0
    }

    /// Flags present in either set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut out = *self;
        out.insert_all(other);
        out
    }

    /// Flags present in both sets.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let mut out = *self;
        for (word, theirs) in out.words.iter_mut().zip(other.words.iter()) {
            *word &= theirs;
        }
        out
    }

    /// Adds every flag of `other` to this set.
    pub fn insert_all(&mut self, other: &Self) {
        for (word, theirs) in self.words.iter_mut().zip(other.words.iter()) {
            *word |= theirs;
        }
    }

    /// Returns `true` if no flag is on.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|word| *word == 0)
    }

    /// Returns `true` if the sets share at least one flag.
    pub fn is_inter(&self, other: &Self) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .any(|(ours, theirs)| ours & theirs != 0)
    }

    /// Returns `true` if every flag of this set is also in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .all(|(ours, theirs)| ours & !theirs == 0)
    }

    /// Number of flags that are on.
    pub fn len(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// First flag that is on at position `from` or later.
    ///
    /// Restart the scan with `next_set(found.index() + 1)` to enumerate the
    /// set in ascending order.
    pub fn next_set(&self, from: usize) -> Option<F> {
        let mut position = from;
        while position < F::MAX {
            let word = position / 64;
            let remaining = self.words[word] & (!0u64 << (position % 64));
            if remaining != 0 {
                return F::from_index(word * 64 + remaining.trailing_zeros() as usize);
            }
            position = (word + 1) * 64;
        }
        None
    }

    /// Iterates the flags that are on, in ascending order.
    pub fn iter(&self) -> FlagIter<'_, F> {
        FlagIter {
            set: self,
            cursor: 0,
        }
    }
}

impl<F: Flag> Default for FlagSet<F> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F: Flag> fmt::Debug for FlagSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<F: Flag> FromIterator<F> for FlagSet<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

impl<F: Flag> Extend<F> for FlagSet<F> {
    fn extend<I: IntoIterator<Item = F>>(&mut self, iter: I) {
        for flag in iter {
            self.set(flag);
        }
    }
}

impl<F: Flag> BitOr for FlagSet<F> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(&rhs)
    }
}

impl<F: Flag> BitAnd for FlagSet<F> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersect(&rhs)
    }
}

impl<'a, F: Flag> IntoIterator for &'a FlagSet<F> {
    type Item = F;
    type IntoIter = FlagIter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over a [`FlagSet`], driven by [`FlagSet::next_set`].
pub struct FlagIter<'a, F: Flag> {
    set: &'a FlagSet<F>,
    cursor: usize,
}

impl<F: Flag> Iterator for FlagIter<'_, F> {
    type Item = F;

    fn next(&mut self) -> Option<F> {
        let flag = self.set.next_set(self.cursor)?;
        self.cursor = flag.index() + 1;
        Some(flag)
    }
}
