//! Slay and brand definitions.
//!
//! [`MODIFIER_TABLE`] links each modifier-carrying object flag to the creature
//! flags it interacts with:
//!
//! - **Slays** fire when the creature has the definition's race flag.
//! - **Brands** fire unless the creature has the definition's resist flag.
//! - Any definition gains a further +100 against a creature carrying its
//!   explicit-vulnerability flag. Some definitions (digging, light) do
//!   nothing else.
//!
//! The table is ordered by ascending multiplier. The resolver relies on that
//! order for tie-breaking: a later (stronger) entry only replaces an earlier
//! one when it is strictly better.

mod mult;

pub use mult::MultiplierVector;

use crate::error::{CombatError, CombatResult};
use crate::flags::{FlagSet, MonsterFlag, ObjectFlag};
use crate::profile::CreatureProfile;
use crate::rng::RngOracle;

/// Index of a modifier definition in [`MODIFIER_TABLE`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumCount,
    strum::EnumIter,
    strum::FromRepr,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum ModifierId {
    Impact1,
    Tunnel1,
    Light1,
    Animal2,
    Evil2,
    Acid2,
    Elec2,
    Fire2,
    Cold2,
    Poison2,
    Undead2,
    Demon2,
    Undead3,
    Demon3,
    Orc3,
    Troll3,
    Giant3,
    Dragon3,
    Acid3,
    Elec3,
    Fire3,
    Cold3,
    Poison3,
    Dragon5,
    Demon5,
    Undead5,
}

/// Number of modifier definitions.
pub const MODIFIER_COUNT: usize = <ModifierId as strum::EnumCount>::COUNT;

impl ModifierId {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Definition for this id.
    #[inline]
    pub fn def(self) -> &'static ModifierDef {
        &MODIFIER_TABLE[self.index()]
    }
}

/// How a definition decides whether it applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ModifierRole {
    /// Fires against creatures of a race.
    Slay,
    /// Fires unless the creature resists.
    Brand,
    /// Only exploits an explicit vulnerability.
    Vulnerability,
}

/// One slay or brand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModifierDef {
    pub id: ModifierId,
    /// Object flag that grants the modifier.
    pub object_flag: ObjectFlag,
    /// Creature race flag a slay exploits.
    pub monster_flag: Option<MonsterFlag>,
    /// Creature flag that voids a brand.
    pub resist_flag: Option<MonsterFlag>,
    /// Creature flag that stacks a further +100.
    pub vuln_flag: Option<MonsterFlag>,
    /// Base multiplier, x100 fixed point.
    pub multiplier: u16,
    pub ranged_verb: &'static str,
    pub melee_verb: &'static str,
    /// What the object does when the modifier is noticed.
    pub active_verb: &'static str,
    /// Creatures affected.
    pub desc: &'static str,
    /// Brand name; `None` for slays.
    pub brand: Option<&'static str>,
}

impl ModifierDef {
    /// A resist flag makes a brand, a race flag a slay; neither leaves only
    /// the vulnerability rule.
    pub const fn role(&self) -> ModifierRole {
        if self.resist_flag.is_some() {
            ModifierRole::Brand
        } else if self.monster_flag.is_some() {
            ModifierRole::Slay
        } else {
            ModifierRole::Vulnerability
        }
    }

    pub const fn is_brand(&self) -> bool {
        matches!(self.role(), ModifierRole::Brand)
    }

    pub const fn is_slay(&self) -> bool {
        matches!(self.role(), ModifierRole::Slay)
    }

    /// Display name: the brand name for brands, the affected creatures
    /// otherwise.
    pub fn name(&self) -> &'static str {
        self.brand.unwrap_or(self.desc)
    }

    /// Verb for an attack of the given reach.
    pub const fn verb(&self, ranged: bool) -> &'static str {
        if ranged {
            self.ranged_verb
        } else {
            self.melee_verb
        }
    }

    /// Whether the slay rule or the brand rule fires against `creature`.
    pub fn fires_against(&self, creature: &CreatureProfile) -> bool {
        let brand_fires = self
            .resist_flag
            .is_some_and(|resist| !creature.has(resist));
        let slay_fires = self.monster_flag.is_some_and(|race| creature.has(race));
        brand_fires || slay_fires
    }

    /// Whether `creature` is explicitly vulnerable to this modifier.
    pub fn exploits_vulnerability(&self, creature: &CreatureProfile) -> bool {
        self.vuln_flag.is_some_and(|vuln| creature.has(vuln))
    }
}

// ============================================================================
// Table
// ============================================================================

/// Ranged, melee and active verbs.
#[derive(Clone, Copy)]
struct Verbs {
    ranged: &'static str,
    melee: &'static str,
    active: &'static str,
}

impl Verbs {
    const fn new(ranged: &'static str, melee: &'static str, active: &'static str) -> Self {
        Self {
            ranged,
            melee,
            active,
        }
    }

    const fn against(self, desc: &'static str) -> Wording {
        Wording { verbs: self, desc }
    }
}

/// Verbs plus the affected-creatures description.
#[derive(Clone, Copy)]
struct Wording {
    verbs: Verbs,
    desc: &'static str,
}

const fn define(
    id: ModifierId,
    object_flag: ObjectFlag,
    multiplier: u16,
    wording: Wording,
) -> ModifierDef {
    ModifierDef {
        id,
        object_flag,
        monster_flag: None,
        resist_flag: None,
        vuln_flag: None,
        multiplier,
        ranged_verb: wording.verbs.ranged,
        melee_verb: wording.verbs.melee,
        active_verb: wording.verbs.active,
        desc: wording.desc,
        brand: None,
    }
}

const fn slay(
    id: ModifierId,
    object_flag: ObjectFlag,
    race: MonsterFlag,
    multiplier: u16,
    wording: Wording,
) -> ModifierDef {
    ModifierDef {
        monster_flag: Some(race),
        ..define(id, object_flag, multiplier, wording)
    }
}

const fn brand(
    id: ModifierId,
    object_flag: ObjectFlag,
    resist: MonsterFlag,
    vuln: Option<MonsterFlag>,
    multiplier: u16,
    name: &'static str,
    wording: Wording,
) -> ModifierDef {
    ModifierDef {
        resist_flag: Some(resist),
        vuln_flag: vuln,
        brand: Some(name),
        ..define(id, object_flag, multiplier, wording)
    }
}

const fn exposes(
    id: ModifierId,
    object_flag: ObjectFlag,
    vuln: MonsterFlag,
    wording: Wording,
) -> ModifierDef {
    ModifierDef {
        vuln_flag: Some(vuln),
        ..define(id, object_flag, 100, wording)
    }
}

use self::ModifierId as Id;
use crate::flags::MonsterFlag as M;
use crate::flags::ObjectFlag as O;

const SMITE: Verbs = Verbs::new("pierces", "smite", "glows");
const FIERCE: Verbs = Verbs::new("deeply pierces", "fiercely smite", "glows brightly");
const BORE: Verbs = Verbs::new("bores into", "hack at", "hums");

const ACID: &str = "creatures not resistant to acid";
const ELEC: &str = "creatures not resistant to electricity";
const FIRE: &str = "creatures not resistant to fire";
const COLD: &str = "creatures not resistant to cold";
const POIS: &str = "creatures not resistant to poison";

/// Every slay and brand, ascending by multiplier.
#[rustfmt::skip]
pub static MODIFIER_TABLE: [ModifierDef; MODIFIER_COUNT] = [
    exposes(Id::Impact1, O::Impact, M::HurtRock,  BORE.against("creatures made of stone")),
    exposes(Id::Tunnel1, O::Tunnel, M::HurtRock,  BORE.against("creatures made of stone")),
    exposes(Id::Light1,  O::Light,  M::HurtLight,
        Verbs::new("dazzles", "dazzle", "glows").against("creatures hurt by light")),

    slay(Id::Animal2, O::SlayAnimal, M::Animal, 200, SMITE.against("animals")),
    slay(Id::Evil2,   O::SlayEvil,   M::Evil,   200, SMITE.against("evil creatures")),
    brand(Id::Acid2,   O::BrandFizz, M::ImAcid, Some(M::HurtAcid), 200, "weak acid",
        Verbs::new("corrodes", "corrode", "fizzes").against(ACID)),
    brand(Id::Elec2,   O::BrandBuzz, M::ImElec, Some(M::HurtElec), 200, "weak lightning",
        Verbs::new("zaps", "zap", "buzzes").against(ELEC)),
    brand(Id::Fire2,   O::BrandWarm, M::ImFire, Some(M::HurtFire), 200, "weak flames",
        Verbs::new("singes", "singe", "grows warm").against(FIRE)),
    brand(Id::Cold2,   O::BrandCool, M::ImCold, Some(M::HurtCold), 200, "weak frost",
        Verbs::new("chills", "chill", "grows cool").against(COLD)),
    brand(Id::Poison2, O::BrandIcky, M::ImPois, None, 200, "weak venom",
        Verbs::new("sickens", "sicken", "glows green").against(POIS)),
    slay(Id::Undead2, O::HurtUndead, M::Undead, 200, SMITE.against("undead")),
    slay(Id::Demon2,  O::HurtDemon,  M::Demon,  200, SMITE.against("demons")),

    slay(Id::Undead3, O::SlayUndead, M::Undead, 300, SMITE.against("undead")),
    slay(Id::Demon3,  O::SlayDemon,  M::Demon,  300, SMITE.against("demons")),
    slay(Id::Orc3,    O::SlayOrc,    M::Orc,    300, SMITE.against("orcs")),
    slay(Id::Troll3,  O::SlayTroll,  M::Troll,  300, SMITE.against("trolls")),
    slay(Id::Giant3,  O::SlayGiant,  M::Giant,  300, SMITE.against("giants")),
    slay(Id::Dragon3, O::SlayDragon, M::Dragon, 300, SMITE.against("dragons")),
    brand(Id::Acid3,   O::BrandAcid, M::ImAcid, Some(M::HurtAcid), 300, "acid",
        Verbs::new("dissolves", "dissolve", "spits").against(ACID)),
    brand(Id::Elec3,   O::BrandElec, M::ImElec, Some(M::HurtElec), 300, "lightning",
        Verbs::new("shocks", "shock", "crackles").against(ELEC)),
    brand(Id::Fire3,   O::BrandFire, M::ImFire, Some(M::HurtFire), 300, "flames",
        Verbs::new("burns", "burn", "flares").against(FIRE)),
    brand(Id::Cold3,   O::BrandCold, M::ImCold, Some(M::HurtCold), 300, "frost",
        Verbs::new("freezes", "freeze", "grows cold").against(COLD)),
    brand(Id::Poison3, O::BrandPois, M::ImPois, None, 300, "venom",
        Verbs::new("poisons", "poison", "seethes").against(POIS)),

    slay(Id::Dragon5, O::KillDragon, M::Dragon, 500, FIERCE.against("dragons")),
    slay(Id::Demon5,  O::KillDemon,  M::Demon,  500, FIERCE.against("demons")),
    slay(Id::Undead5, O::KillUndead, M::Undead, 500, FIERCE.against("undead")),
];

// ============================================================================
// Lookups
// ============================================================================

/// Definition granted by `flag`.
pub fn lookup(flag: ObjectFlag) -> CombatResult<&'static ModifierDef> {
    MODIFIER_TABLE
        .iter()
        .find(|def| def.object_flag == flag)
        .ok_or(CombatError::UnknownModifier(flag))
}

/// Definitions whose object flag is in both `flags` and `mask`, in table order.
pub fn list_modifiers(
    flags: &FlagSet<ObjectFlag>,
    mask: &FlagSet<ObjectFlag>,
) -> Vec<&'static ModifierDef> {
    let selected = flags.intersect(mask);
    MODIFIER_TABLE
        .iter()
        .filter(|def| selected.test(def.object_flag))
        .collect()
}

/// Object flags (with their active verbs) the identification subsystem
/// should notice when an object carrying `flags` is used, restricted to
/// `mask`.
pub fn noticed_modifiers(
    flags: &FlagSet<ObjectFlag>,
    mask: &FlagSet<ObjectFlag>,
) -> Vec<(ObjectFlag, &'static str)> {
    list_modifiers(flags, mask)
        .into_iter()
        .map(|def| (def.object_flag, def.active_verb))
        .collect()
}

/// Creature race flags that the slays in `flags` target.
pub fn react_to_modifiers(flags: &FlagSet<ObjectFlag>) -> FlagSet<MonsterFlag> {
    MODIFIER_TABLE
        .iter()
        .filter(|def| flags.test(def.object_flag))
        .filter_map(|def| def.monster_flag)
        .collect()
}

/// Whether any modifier in `flags` affects `creature`: a matching slay, an
/// unresisted brand, or an explicit vulnerability.
pub fn hurts_creature(flags: &FlagSet<ObjectFlag>, creature: &CreatureProfile) -> bool {
    MODIFIER_TABLE.iter().any(|def| {
        flags.test(def.object_flag)
            && (def.fires_against(creature) || def.exploits_vulnerability(creature))
    })
}

/// Draws a definition uniformly among those whose object flag is in `mask`.
///
/// Fails up front when the mask admits no definition.
pub fn random_modifier(
    mask: &FlagSet<ObjectFlag>,
    rng: &impl RngOracle,
    seed: u64,
) -> CombatResult<&'static ModifierDef> {
    let candidates: Vec<_> = MODIFIER_TABLE
        .iter()
        .filter(|def| mask.test(def.object_flag))
        .collect();
    if candidates.is_empty() {
        return Err(CombatError::EmptySelectionMask);
    }

    let pick = rng.range(seed, 0, candidates.len() as u32 - 1) as usize;
    Ok(candidates[pick])
}
