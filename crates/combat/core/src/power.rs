//! Slay power: how much a modifier combination is worth on average.
//!
//! A combination is scored by resolving it against every reference creature
//! and averaging the multipliers. Scores are cached per combination.

use crate::cache::{CacheLookup, CombinationCache};
use crate::config::CombatConfig;
use crate::profile::CreatureProfile;
use crate::resolver::{ResolveMode, resolve};
use crate::slays::MultiplierVector;

/// Average resolved multiplier (x100) of `mults` across `creatures`.
///
/// Never touches a cache. An empty reference set scores the baseline.
pub fn average_multiplier(mults: &MultiplierVector, creatures: &[CreatureProfile]) -> u32 {
    if creatures.is_empty() {
        return u32::from(CombatConfig::BASELINE_MULTIPLIER);
    }

    let total: u64 = creatures
        .iter()
        .map(|creature| u64::from(resolve(creature, mults, ResolveMode::Simulate).multiplier))
        .sum();
    (total / creatures.len() as u64) as u32
}

/// Score of `mults`, read from `cache` when already scored and computed and
/// stored otherwise.
pub fn slay_power(
    mults: &MultiplierVector,
    cache: &mut CombinationCache,
    creatures: &[CreatureProfile],
) -> u32 {
    if let CacheLookup::Scored(value) = cache.lookup(mults) {
        return value;
    }

    let value = average_multiplier(mults, creatures);
    cache.insert(*mults, value);
    value
}

/// Scores every registered combination still missing a score. Returns how
/// many were scored.
pub fn score_cache(cache: &mut CombinationCache, creatures: &[CreatureProfile]) -> usize {
    let pending = cache.unscored();
    for mults in &pending {
        let value = average_multiplier(mults, creatures);
        cache.insert(*mults, value);
    }

    tracing::debug!(
        scored = pending.len(),
        creatures = creatures.len(),
        "scored combination cache"
    );
    pending.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::MonsterFlag;
    use crate::slays::ModifierId;

    fn creatures() -> Vec<CreatureProfile> {
        vec![
            CreatureProfile::from_flags(&[MonsterFlag::Dragon, MonsterFlag::ImFire]),
            CreatureProfile::from_flags(&[MonsterFlag::Orc]),
        ]
    }

    #[test]
    fn averages_over_reference_set() {
        let dragon_bane: MultiplierVector = [(ModifierId::Dragon5, 500)].into_iter().collect();
        assert_eq!(average_multiplier(&dragon_bane, &creatures()), 300);
        assert_eq!(average_multiplier(&dragon_bane, &[]), 100);
    }

    #[test]
    fn stored_score_wins_over_recompute() {
        let mut cache = CombinationCache::new();
        let fire: MultiplierVector = [(ModifierId::Fire3, 300)].into_iter().collect();

        assert_eq!(slay_power(&fire, &mut cache, &creatures()), 200);
        assert_eq!(cache.lookup(&fire), CacheLookup::Scored(200));

        cache.insert(fire, 0);
        assert_eq!(slay_power(&fire, &mut cache, &creatures()), 0);
    }

    #[test]
    fn scoring_pass_fills_every_entry() {
        let mut cache = CombinationCache::new();
        let orcs: MultiplierVector = [(ModifierId::Orc3, 300)].into_iter().collect();
        let evil: MultiplierVector = [(ModifierId::Evil2, 200)].into_iter().collect();
        cache.register(orcs);
        cache.register(evil);

        assert_eq!(score_cache(&mut cache, &creatures()), 2);
        assert_eq!(cache.get(&orcs), Some(200));
        assert_eq!(cache.get(&evil), Some(100));
        assert_eq!(score_cache(&mut cache, &creatures()), 0);
    }
}
