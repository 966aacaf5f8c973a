//! Table of every distinct multiplier combination in the equipment catalogue.
//!
//! Power scoring resolves each combination against a reference creature set,
//! which is too slow to repeat per object. The cache stores the score once
//! per distinct [`MultiplierVector`]. It is a chained hash table keyed by the
//! djb2 fold of the vector ([`MultiplierVector::hash_code`]); collisions are
//! resolved by full element-wise comparison.

use crate::config::CombatConfig;
use crate::error::{CombatError, CombatResult};
use crate::profile::WeaponProfile;
use crate::slays::MultiplierVector;

/// Result of a cache lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CacheLookup {
    /// The combination was never registered.
    Missing,
    /// Registered, not yet scored.
    Unscored,
    /// Registered with a score (zero is a legal score).
    Scored(u32),
}

impl CacheLookup {
    /// The stored score, if any.
    pub const fn score(self) -> Option<u32> {
        match self {
            Self::Scored(value) => Some(value),
            Self::Missing | Self::Unscored => None,
        }
    }

    /// Registered, scored or not.
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Missing)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheEntry {
    pub mults: MultiplierVector,
    pub value: Option<u32>,
}

/// Occupancy figures, for logging and the inspection CLI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub buckets: usize,
    pub entries: usize,
    pub scored: usize,
    pub used_buckets: usize,
    pub longest_chain: usize,
}

#[derive(Clone, Debug)]
pub struct CombinationCache {
    buckets: Vec<Vec<CacheEntry>>,
}

impl CombinationCache {
    /// Empty cache with the default bucket count.
    pub fn new() -> Self {
        Self {
            buckets: vec![Vec::new(); CombatConfig::DEFAULT_CACHE_BUCKETS],
        }
    }

    /// Empty cache with `count` buckets.
    pub fn with_buckets(count: usize) -> CombatResult<Self> {
        if count == 0 {
            return Err(CombatError::InvalidBucketCount);
        }
        Ok(Self {
            buckets: vec![Vec::new(); count],
        })
    }

    /// Registers the combination of every template that carries at least
    /// one modifier.
    pub fn from_templates<'a>(
        count: usize,
        templates: impl IntoIterator<Item = &'a WeaponProfile>,
    ) -> CombatResult<Self> {
        let mut cache = Self::with_buckets(count)?;
        let mut scanned = 0usize;
        for weapon in templates {
            scanned += 1;
            let mults = MultiplierVector::from_weapon(weapon);
            if !mults.is_empty() {
                cache.register(mults);
            }
        }

        let stats = cache.stats();
        tracing::debug!(
            scanned,
            combinations = stats.entries,
            used_buckets = stats.used_buckets,
            longest_chain = stats.longest_chain,
            "built combination cache"
        );
        Ok(cache)
    }

    /// Bucket holding `mults`.
    pub fn bucket_of(&self, mults: &MultiplierVector) -> usize {
        (mults.hash_code() % self.buckets.len() as u64) as usize
    }

    pub fn lookup(&self, mults: &MultiplierVector) -> CacheLookup {
        match self.find(mults) {
            None => CacheLookup::Missing,
            Some(CacheEntry { value: None, .. }) => CacheLookup::Unscored,
            Some(CacheEntry {
                value: Some(value), ..
            }) => CacheLookup::Scored(*value),
        }
    }

    /// The stored score, if `mults` is registered and scored.
    pub fn get(&self, mults: &MultiplierVector) -> Option<u32> {
        self.lookup(mults).score()
    }

    /// Stores `value` for `mults`, updating an existing entry in place or
    /// appending to the end of its chain.
    pub fn insert(&mut self, mults: MultiplierVector, value: u32) {
        self.upsert(mults, Some(value));
    }

    /// Adds `mults` unscored. Returns false if it was already present.
    pub fn register(&mut self, mults: MultiplierVector) -> bool {
        if self.lookup(&mults).is_known() {
            return false;
        }
        self.upsert(mults, None);
        true
    }

    /// Combinations still waiting for a score, in bucket order.
    pub fn unscored(&self) -> Vec<MultiplierVector> {
        self.entries()
            .filter(|entry| entry.value.is_none())
            .map(|entry| entry.mults)
            .collect()
    }

    /// All entries, in bucket then chain order.
    pub fn entries(&self) -> impl Iterator<Item = &CacheEntry> {
        self.buckets.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            buckets: self.buckets.len(),
            entries: self.len(),
            scored: self.entries().filter(|entry| entry.value.is_some()).count(),
            used_buckets: self.buckets.iter().filter(|chain| !chain.is_empty()).count(),
            longest_chain: self.buckets.iter().map(Vec::len).max().unwrap_or(0),
        }
    }

    fn find(&self, mults: &MultiplierVector) -> Option<&CacheEntry> {
        self.buckets[self.bucket_of(mults)]
            .iter()
            .find(|entry| entry.mults == *mults)
    }

    fn upsert(&mut self, mults: MultiplierVector, value: Option<u32>) {
        let bucket = self.bucket_of(&mults);
        let chain = &mut self.buckets[bucket];
        match chain.iter_mut().find(|entry| entry.mults == mults) {
            Some(entry) => entry.value = value,
            None => chain.push(CacheEntry { mults, value }),
        }
    }
}

impl Default for CombinationCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slays::ModifierId;

    fn vector(entries: &[(ModifierId, u16)]) -> MultiplierVector {
        entries.iter().copied().collect()
    }

    #[test]
    fn zero_buckets_rejected() {
        assert_eq!(
            CombinationCache::with_buckets(0).unwrap_err(),
            CombatError::InvalidBucketCount
        );
    }

    #[test]
    fn register_then_score() {
        let mut cache = CombinationCache::new();
        let mults = vector(&[(ModifierId::Fire3, 300)]);

        assert_eq!(cache.lookup(&mults), CacheLookup::Missing);
        assert!(!cache.lookup(&mults).is_known());
        assert!(cache.register(mults));
        assert!(!cache.register(mults));
        assert_eq!(cache.lookup(&mults), CacheLookup::Unscored);
        assert!(cache.lookup(&mults).is_known());
        assert_eq!(cache.unscored(), vec![mults]);

        cache.insert(mults, 250);
        assert_eq!(cache.lookup(&mults), CacheLookup::Scored(250));
        assert!(cache.unscored().is_empty());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn single_bucket_chains_everything() {
        let mut cache = CombinationCache::with_buckets(1).unwrap();
        let a = vector(&[(ModifierId::Orc3, 300)]);
        let b = vector(&[(ModifierId::Troll3, 300)]);
        let c = vector(&[(ModifierId::Giant3, 300)]);
        cache.insert(a, 1);
        cache.insert(b, 2);
        cache.insert(c, 3);
        cache.insert(b, 20);

        let stats = cache.stats();
        assert_eq!(stats.used_buckets, 1);
        assert_eq!(stats.longest_chain, 3);
        assert_eq!(cache.get(&b), Some(20));

        let order: Vec<_> = cache.entries().map(|entry| entry.value).collect();
        assert_eq!(order, vec![Some(1), Some(20), Some(3)]);
    }

    #[test]
    fn registering_keeps_existing_score() {
        let mut cache = CombinationCache::new();
        let mults = vector(&[(ModifierId::Evil2, 200)]);
        cache.insert(mults, 7);
        assert!(!cache.register(mults));
        assert_eq!(cache.get(&mults), Some(7));
    }
}
