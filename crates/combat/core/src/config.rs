/// Combat engine constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CombatConfig {
    /// Number of chains in the combination cache. Should be a prime
    /// comfortably above the number of distinct catalogue combinations.
    pub cache_buckets: usize,
    /// Session seed used to generate rune names.
    pub rune_seed: u64,
    /// Whether resolutions run as real attacks (emitting observations) or
    /// as simulations.
    pub learning: bool,
}

impl CombatConfig {
    // ===== fixed-point conventions =====
    /// Multiplier meaning "no modifier" (x1.00).
    pub const BASELINE_MULTIPLIER: u16 = 100;
    /// Extra multiplier granted against an explicitly vulnerable creature.
    pub const VULNERABILITY_BONUS: u16 = 100;
    /// Seed of the combination hash fold.
    pub const HASH_SEED: u64 = 5381;
    /// Maximum number of distinct pvals a single object can carry.
    pub const MAX_PVALS: usize = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_CACHE_BUCKETS: usize = 257;
    pub const DEFAULT_RUNE_SEED: u64 = 0x5eed_0f_0b1ec7;

    pub fn new() -> Self {
        Self {
            cache_buckets: Self::DEFAULT_CACHE_BUCKETS,
            rune_seed: Self::DEFAULT_RUNE_SEED,
            learning: true,
        }
    }

    pub fn with_rune_seed(rune_seed: u64) -> Self {
        Self {
            rune_seed,
            ..Self::new()
        }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
