//! Object flag registry.
//!
//! [`OBJECT_FLAG_TABLE`] is the static description of every object flag:
//! its kind, whether it is graduated by a pval, how strongly each pval point
//! counts, its base power and how that power is weighted per equipment slot.
//! The table is indexed by [`ObjectFlag`] discriminant, so every lookup is a
//! single array read.
//!
//! [`FlagRegistry`] adds the per-session part: the rune name shown for each
//! flag before it is identified.

mod runes;

use crate::error::CombatResult;
use crate::flags::{Flag, FlagKind, ObjectFlag};
use crate::rng::{PcgRng, RngOracle};

// ============================================================================
// Equipment Slots
// ============================================================================

/// Where an object is worn, for slot-weighted power ratings.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumCount,
    strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipSlot {
    #[default]
    Weapon,
    Bow,
    Ring,
    Amulet,
    Light,
    Body,
    Cloak,
    Shield,
    Hat,
    Gloves,
    Boots,
    /// Carried but not worn (ammunition, thrown objects).
    Pack,
}

/// Per-slot multipliers applied to a flag's base power.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotWeights {
    worn: [u8; 11],
}

impl SlotWeights {
    /// Same weight in every slot.
    pub const UNIFORM: Self = Self { worn: [1; 11] };

    /// Offensive flags are worth more away from the weapon slots.
    pub const OFFENSE: Self = Self {
        worn: [1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2],
    };

    /// Weight of the flag when the object sits in `slot`.
    pub const fn get(&self, slot: EquipSlot) -> u8 {
        match slot {
            EquipSlot::Weapon => self.worn[0],
            EquipSlot::Bow => self.worn[1],
            EquipSlot::Ring => self.worn[2],
            EquipSlot::Amulet => self.worn[3],
            EquipSlot::Light => self.worn[4],
            EquipSlot::Body => self.worn[5],
            EquipSlot::Cloak => self.worn[6],
            EquipSlot::Shield => self.worn[7],
            EquipSlot::Hat => self.worn[8],
            EquipSlot::Gloves => self.worn[9],
            EquipSlot::Boots => self.worn[10],
            EquipSlot::Pack => 1,
        }
    }
}

// ============================================================================
// Flag Table
// ============================================================================

/// Static description of one object flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlagInfo {
    pub flag: ObjectFlag,
    pub kind: FlagKind,
    /// Graduated by a pval rather than simply present or absent.
    pub uses_pval: bool,
    /// How much one pval point counts towards power.
    pub pval_weight: u8,
    /// Base power rating.
    pub power: i32,
    pub weights: SlotWeights,
    pub name: &'static str,
}

const fn entry(
    flag: ObjectFlag,
    kind: FlagKind,
    uses_pval: bool,
    pval_weight: u8,
    power: i32,
    weights: SlotWeights,
    name: &'static str,
) -> FlagInfo {
    FlagInfo {
        flag,
        kind,
        uses_pval,
        pval_weight,
        power,
        weights,
        name,
    }
}

use crate::flags::FlagKind::*;
use crate::flags::ObjectFlag as F;
const U: SlotWeights = SlotWeights::UNIFORM;
const O: SlotWeights = SlotWeights::OFFENSE;

/// Every object flag, in discriminant order.
#[rustfmt::skip]
pub static OBJECT_FLAG_TABLE: [FlagInfo; ObjectFlag::MAX] = [
    entry(F::Str,         Stat,    true,  1, 9,   U, "strength"),
    entry(F::Int,         Stat,    true,  1, 5,   U, "intelligence"),
    entry(F::Wis,         Stat,    true,  1, 5,   U, "wisdom"),
    entry(F::Dex,         Stat,    true,  1, 8,   U, "dexterity"),
    entry(F::Con,         Stat,    true,  1, 12,  U, "constitution"),
    entry(F::Stealth,     Stat,    true,  1, 8,   U, "stealth"),
    entry(F::Searching,   Stat,    true,  1, 2,   U, "searching skill"),
    entry(F::Infra,       Stat,    true,  1, 4,   U, "infravision"),
    entry(F::Tunnel,      Stat,    true,  1, 3,   U, "tunneling"),
    entry(F::Speed,       Stat,    true,  5, 20,  U, "speed"),
    entry(F::Blows,       Stat,    true,  3, 15,  O, "attack speed"),
    entry(F::Shots,       Stat,    true,  3, 15,  O, "shooting speed"),
    entry(F::Might,       Stat,    true,  3, 12,  O, "shooting power"),

    entry(F::SustStr,     Sustain, false, 0, 5,   U, "sustain strength"),
    entry(F::SustInt,     Sustain, false, 0, 2,   U, "sustain intelligence"),
    entry(F::SustWis,     Sustain, false, 0, 2,   U, "sustain wisdom"),
    entry(F::SustDex,     Sustain, false, 0, 4,   U, "sustain dexterity"),
    entry(F::SustCon,     Sustain, false, 0, 3,   U, "sustain constitution"),

    entry(F::ImAcid,      Resist,  false, 0, 38,  U, "acid immunity"),
    entry(F::ImElec,      Resist,  false, 0, 35,  U, "lightning immunity"),
    entry(F::ImFire,      Resist,  false, 0, 40,  U, "fire immunity"),
    entry(F::ImCold,      Resist,  false, 0, 37,  U, "cold immunity"),
    entry(F::ResAcid,     Resist,  false, 0, 5,   U, "resist acid"),
    entry(F::ResElec,     Resist,  false, 0, 6,   U, "resist lightning"),
    entry(F::ResFire,     Resist,  false, 0, 6,   U, "resist fire"),
    entry(F::ResCold,     Resist,  false, 0, 6,   U, "resist cold"),
    entry(F::ResPois,     Resist,  false, 0, 28,  U, "resist poison"),
    entry(F::ResFear,     Resist,  false, 0, 6,   U, "resist fear"),
    entry(F::ResLight,    Resist,  false, 0, 6,   U, "resist light"),
    entry(F::ResDark,     Resist,  false, 0, 16,  U, "resist darkness"),
    entry(F::ResBlind,    Resist,  false, 0, 16,  U, "resist blindness"),
    entry(F::ResConf,     Resist,  false, 0, 24,  U, "resist confusion"),
    entry(F::ResSound,    Resist,  false, 0, 14,  U, "resist sound"),
    entry(F::ResShard,    Resist,  false, 0, 8,   U, "resist shards"),
    entry(F::ResNexus,    Resist,  false, 0, 15,  U, "resist nexus"),
    entry(F::ResNether,   Resist,  false, 0, 20,  U, "resist nether"),
    entry(F::ResChaos,    Resist,  false, 0, 20,  U, "resist chaos"),
    entry(F::ResDisen,    Resist,  false, 0, 20,  U, "resist disenchantment"),

    entry(F::SlowDigest,  Misc,    false, 0, 2,   U, "slow digestion"),
    entry(F::Feather,     Misc,    false, 0, 1,   U, "feather falling"),
    entry(F::Light,       Misc,    false, 0, 3,   U, "permanent light"),
    entry(F::Regen,       Misc,    false, 0, 5,   U, "regeneration"),
    entry(F::Telepathy,   Misc,    false, 0, 35,  U, "telepathy"),
    entry(F::SeeInvis,    Misc,    false, 0, 6,   U, "see invisible"),
    entry(F::FreeAct,     Misc,    false, 0, 8,   U, "free action"),
    entry(F::HoldLife,    Misc,    false, 0, 6,   U, "hold life"),
    entry(F::Impact,      Misc,    false, 0, 10,  O, "earthquakes"),
    entry(F::Blessed,     Misc,    false, 0, 1,   U, "blessed"),

    entry(F::SlayAnimal,  Slay,    true,  1, 10,  O, "slay animals"),
    entry(F::SlayEvil,    Slay,    true,  1, 15,  O, "slay evil"),
    entry(F::SlayUndead,  Slay,    true,  1, 12,  O, "slay undead"),
    entry(F::SlayDemon,   Slay,    true,  1, 12,  O, "slay demons"),
    entry(F::SlayOrc,     Slay,    true,  1, 6,   O, "slay orcs"),
    entry(F::SlayTroll,   Slay,    true,  1, 8,   O, "slay trolls"),
    entry(F::SlayGiant,   Slay,    true,  1, 8,   O, "slay giants"),
    entry(F::SlayDragon,  Slay,    true,  1, 10,  O, "slay dragons"),
    entry(F::KillDragon,  Slay,    true,  2, 18,  O, "kill dragons"),
    entry(F::KillDemon,   Slay,    true,  2, 18,  O, "kill demons"),
    entry(F::KillUndead,  Slay,    true,  2, 18,  O, "kill undead"),

    entry(F::BrandFizz,   Brand,   true,  1, 8,   O, "weak acid brand"),
    entry(F::BrandBuzz,   Brand,   true,  1, 8,   O, "weak lightning brand"),
    entry(F::BrandWarm,   Brand,   true,  1, 8,   O, "weak fire brand"),
    entry(F::BrandCool,   Brand,   true,  1, 8,   O, "weak cold brand"),
    entry(F::BrandIcky,   Brand,   true,  1, 8,   O, "weak poison brand"),
    entry(F::BrandAcid,   Brand,   true,  1, 16,  O, "acid brand"),
    entry(F::BrandElec,   Brand,   true,  1, 16,  O, "lightning brand"),
    entry(F::BrandFire,   Brand,   true,  1, 16,  O, "fire brand"),
    entry(F::BrandCold,   Brand,   true,  1, 16,  O, "cold brand"),
    entry(F::BrandPois,   Brand,   true,  1, 16,  O, "poison brand"),

    entry(F::HurtUndead,  Hurt,    false, 0, 6,   O, "harms undead"),
    entry(F::HurtDemon,   Hurt,    false, 0, 6,   O, "harms demons"),

    entry(F::Teleport,    Curse,   false, 0, -40, U, "random teleportation"),
    entry(F::DrainExp,    Curse,   false, 0, -5,  U, "experience drain"),
    entry(F::ImpairHp,    Curse,   false, 0, -9,  U, "impaired hitpoint recovery"),
    entry(F::ImpairMana,  Curse,   false, 0, -9,  U, "impaired mana recovery"),
    entry(F::Afraid,      Curse,   false, 0, -20, U, "constant fear"),
    entry(F::NoTeleport,  Curse,   false, 0, -20, U, "teleportation ban"),
    entry(F::Aggravate,   Curse,   false, 0, -20, U, "aggravation"),
    entry(F::LightCurse,  Curse,   false, 0, -1,  U, "minor curse"),
    entry(F::HeavyCurse,  Curse,   false, 0, -4,  U, "heavy curse"),
    entry(F::PermaCurse,  Curse,   false, 0, -40, U, "permanent curse"),

    entry(F::InstaArt,    Info,    false, 0, 0,   U, "instant artifact"),
    entry(F::EasyKnow,    Info,    false, 0, 0,   U, "easily known"),
    entry(F::HideType,    Info,    false, 0, 0,   U, "hidden type"),
    entry(F::ShowMods,    Info,    false, 0, 0,   U, "shown modifiers"),
];

/// Static description of `flag`.
#[inline]
pub fn flag_info(flag: ObjectFlag) -> &'static FlagInfo {
    &OBJECT_FLAG_TABLE[flag.index()]
}

/// Static description of the flag at a raw index.
pub fn flag_info_at(index: usize) -> CombatResult<&'static FlagInfo> {
    ObjectFlag::try_from_index(index).map(flag_info)
}

/// Kind of `flag`.
pub fn kind_of(flag: ObjectFlag) -> FlagKind {
    flag_info(flag).kind
}

/// Whether `flag` is graduated by a pval.
pub fn uses_pval(flag: ObjectFlag) -> bool {
    flag_info(flag).uses_pval
}

/// Weight of one pval point of `flag`.
pub fn pval_weight(flag: ObjectFlag) -> u8 {
    flag_info(flag).pval_weight
}

/// Base power rating of `flag`.
pub fn power_of(flag: ObjectFlag) -> i32 {
    flag_info(flag).power
}

/// Slot multiplier for the power of `flag` on an object worn in `slot`.
pub fn slot_weight(flag: ObjectFlag, slot: EquipSlot) -> u8 {
    flag_info(flag).weights.get(slot)
}

/// Display name of `flag`.
pub fn name_of(flag: ObjectFlag) -> &'static str {
    flag_info(flag).name
}

/// Description of a flag kind.
pub fn kind_name(kind: FlagKind) -> &'static str {
    kind.description()
}

// ============================================================================
// Session Registry
// ============================================================================

/// Flag registry for one session: the static table plus rune names.
#[derive(Clone, Debug)]
pub struct FlagRegistry {
    runes: Vec<String>,
}

impl FlagRegistry {
    /// Builds the registry, generating rune names from `seed`.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(&PcgRng, seed)
    }

    /// Builds the registry with an explicit RNG oracle.
    pub fn with_rng(rng: &impl RngOracle, seed: u64) -> Self {
        let runes = runes::generate(rng, seed);
        tracing::debug!(flags = runes.len(), seed, "generated rune names");
        Self { runes }
    }

    /// Static description of `flag`.
    pub fn info(&self, flag: ObjectFlag) -> &'static FlagInfo {
        flag_info(flag)
    }

    /// Static description of the flag at a raw index.
    pub fn info_at(&self, index: usize) -> CombatResult<&'static FlagInfo> {
        flag_info_at(index)
    }

    /// Rune name shown for `flag` before it is identified.
    pub fn rune_of(&self, flag: ObjectFlag) -> &str {
        &self.runes[flag.index()]
    }

    /// Iterates every flag with its description and rune name.
    pub fn iter(&self) -> impl Iterator<Item = (&'static FlagInfo, &str)> {
        OBJECT_FLAG_TABLE
            .iter()
            .zip(self.runes.iter().map(String::as_str))
    }
}
