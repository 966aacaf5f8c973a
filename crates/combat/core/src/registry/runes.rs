//! Per-session rune names.
//!
//! Every object flag gets a pronounceable token that the identification
//! display shows until the flag is learned. Tokens are 3 to 8 letters wrapped
//! in double quotes (`"bakoru"`), unique within a session, and stable for the
//! registry's lifetime.

use std::collections::BTreeSet;

use crate::flags::{Flag, ObjectFlag};
use crate::rng::{RngOracle, compute_seed};

const CONSONANTS: &[u8] = b"bcdfghjklmnprstvwz";
const VOWELS: &[u8] = b"aeiouy";

const MIN_LEN: u32 = 3;
const MAX_LEN: u32 = 8;

/// Context tag for the length draw; letter draws use `1 + position`.
const LENGTH_DRAW: u32 = 0;

/// Generates one unique rune name per object flag, in flag order.
pub(crate) fn generate(rng: &impl RngOracle, session_seed: u64) -> Vec<String> {
    let mut taken = BTreeSet::new();
    let mut names = Vec::with_capacity(ObjectFlag::MAX);

    for index in 0..ObjectFlag::MAX {
        let mut attempt = 0u32;
        let name = loop {
            let candidate = make_name(rng, session_seed, index as u64, attempt);
            if taken.insert(candidate.clone()) {
                break candidate;
            }
            tracing::trace!(index, attempt, %candidate, "rune name collision, retrying");
            attempt = attempt.wrapping_add(1);
        };
        names.push(name);
    }

    names
}

fn make_name(rng: &impl RngOracle, session_seed: u64, subject: u64, attempt: u32) -> String {
    let len = rng.range(
        compute_seed(session_seed, subject, attempt, LENGTH_DRAW),
        MIN_LEN,
        MAX_LEN,
    );
    let mut vowel = rng.next_u32(compute_seed(session_seed, subject, attempt, u32::MAX)) % 2 == 0;

    let mut name = String::with_capacity(len as usize + 2);
    name.push('"');
    name.extend((0..len).map(|position| {
        let pool = if vowel { VOWELS } else { CONSONANTS };
        vowel = !vowel;
        let seed = compute_seed(session_seed, subject, attempt, position + 1);
        pool[rng.next_u32(seed) as usize % pool.len()] as char
    }));
    name.push('"');
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PcgRng;

    #[test]
    fn names_are_unique_and_bounded() {
        let names = generate(&PcgRng, 1234);
        assert_eq!(names.len(), ObjectFlag::MAX);

        let distinct: BTreeSet<_> = names.iter().collect();
        assert_eq!(distinct.len(), names.len());

        for name in &names {
            let letters = name
                .strip_prefix('"')
                .and_then(|rest| rest.strip_suffix('"'))
                .unwrap_or_else(|| panic!("unquoted rune: {name}"));
            assert!((3..=8).contains(&letters.len()), "bad length: {name}");
            assert!(letters.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn same_seed_reproduces_names() {
        assert_eq!(generate(&PcgRng, 99), generate(&PcgRng, 99));
        assert_ne!(generate(&PcgRng, 99), generate(&PcgRng, 100));
    }
}
