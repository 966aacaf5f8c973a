//! Read-only views of the two sides of an attack.
//!
//! The monster and object subsystems own the real records; the engine only
//! needs the creature's race flags and the weapon's flags, pvals and dice.

use arrayvec::ArrayVec;

use crate::config::CombatConfig;
use crate::error::{CombatError, CombatResult};
use crate::flags::{FlagSet, MonsterFlag, ObjectFlag};
use crate::registry::EquipSlot;

/// The creature being attacked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CreatureProfile {
    pub flags: FlagSet<MonsterFlag>,
    /// The player can currently see the creature, so lore can be learned.
    pub visible: bool,
}

impl CreatureProfile {
    pub fn new(flags: FlagSet<MonsterFlag>) -> Self {
        Self {
            flags,
            visible: true,
        }
    }

    pub fn from_flags(flags: &[MonsterFlag]) -> Self {
        Self::new(FlagSet::from_flags(flags))
    }

    /// Marks the creature as out of the player's sight (builder pattern).
    #[must_use]
    pub fn unseen(mut self) -> Self {
        self.visible = false;
        self
    }

    #[inline]
    pub fn has(&self, flag: MonsterFlag) -> bool {
        self.flags.test(flag)
    }
}

/// Damage dice, e.g. `2d5`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dice {
    pub count: u8,
    pub sides: u8,
}

impl Dice {
    pub const fn new(count: u8, sides: u8) -> Self {
        Self { count, sides }
    }

    /// Average roll in tenths of a point: `count * (sides + 1) / 2`.
    pub const fn average_tenths(&self) -> i32 {
        self.count as i32 * (self.sides as i32 + 1) * 5
    }
}

/// One pval and the flags it grades.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PvalSlot {
    pub value: i16,
    pub flags: FlagSet<ObjectFlag>,
}

/// The weapon (or launcher, or ammunition) doing the damage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeaponProfile {
    pub flags: FlagSet<ObjectFlag>,
    pub pvals: ArrayVec<PvalSlot, { CombatConfig::MAX_PVALS }>,
    pub dice: Dice,
    /// Flat bonus added to every hit, in whole points.
    pub to_dam: i16,
    pub slot: EquipSlot,
}

impl WeaponProfile {
    pub fn new(dice: Dice, slot: EquipSlot) -> Self {
        Self {
            dice,
            slot,
            ..Self::default()
        }
    }

    /// Adds `flag` (builder pattern).
    #[must_use]
    pub fn with_flag(mut self, flag: ObjectFlag) -> Self {
        self.flags.set(flag);
        self
    }

    /// Sets the flat damage bonus (builder pattern).
    #[must_use]
    pub fn with_to_dam(mut self, to_dam: i16) -> Self {
        self.to_dam = to_dam;
        self
    }

    /// Adds `flag` graded by `value`.
    ///
    /// Flags sharing a value share a pval slot; a new value takes a new slot.
    pub fn add_pval(&mut self, flag: ObjectFlag, value: i16) -> CombatResult<()> {
        for slot in self.pvals.iter_mut() {
            slot.flags.clear(flag);
        }
        self.pvals.retain(|slot| !slot.flags.is_empty());

        match self.pvals.iter_mut().find(|slot| slot.value == value) {
            Some(slot) => {
                slot.flags.set(flag);
            }
            None => {
                self.pvals
                    .try_push(PvalSlot {
                        value,
                        flags: FlagSet::from_flags(&[flag]),
                    })
                    .map_err(|_| CombatError::PvalOverflow {
                        max: CombatConfig::MAX_PVALS,
                    })?;
            }
        }
        self.flags.set(flag);
        Ok(())
    }

    /// Pval grading `flag`, if any.
    pub fn pval_of(&self, flag: ObjectFlag) -> Option<i16> {
        self.pvals
            .iter()
            .find(|slot| slot.flags.test(flag))
            .map(|slot| slot.value)
    }
}
