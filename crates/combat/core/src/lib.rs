//! Slay and brand resolution rules shared by the game and offline tools.
//!
//! `combat-core` answers one question: given a creature and the modifiers on
//! the attacking objects, which single multiplier applies? Everything here is
//! pure and deterministic. Flags live in [`flags`], their static properties in
//! [`registry`], the modifier table in [`slays`], and the selection rule in
//! [`resolver`]. [`cache`] and [`power`] score modifier combinations for
//! object valuation; [`damage`] turns multipliers into description figures.
pub mod cache;
pub mod config;
pub mod damage;
pub mod error;
pub mod flags;
pub mod mask;
pub mod power;
pub mod profile;
pub mod registry;
pub mod resolver;
pub mod rng;
pub mod slays;

pub use cache::{CacheEntry, CacheLookup, CacheStats, CombinationCache};
pub use config::CombatConfig;
pub use damage::{
    AttackKind, DamageBreakdown, DamageEntry, average_damage, average_hit, damage_breakdown,
    roll_damage, weapon_breakdown,
};
pub use error::{CombatError, CombatResult, ErrorSeverity};
pub use flags::{Flag, FlagKind, FlagKinds, FlagSet, MonsterFlag, ObjectFlag};
pub use mask::{build_kind_mask, build_mask, build_pval_mask, is_cursed, modifier_mask};
pub use power::{average_multiplier, score_cache, slay_power};
pub use profile::{CreatureProfile, Dice, PvalSlot, WeaponProfile};
pub use registry::{EquipSlot, FlagInfo, FlagRegistry, OBJECT_FLAG_TABLE};
pub use resolver::{Observations, Resolution, ResolveMode, resolve};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use slays::{
    MODIFIER_COUNT, MODIFIER_TABLE, ModifierDef, ModifierId, ModifierRole, MultiplierVector,
    hurts_creature, list_modifiers, lookup, noticed_modifiers, random_modifier,
    react_to_modifiers,
};
