//! Picks the single best multiplier a weapon gets against a creature.
//!
//! The resolver walks [`MODIFIER_TABLE`] once, in ascending multiplier order.
//! For every definition with a set slot it applies:
//!
//! 1. **Slay/brand rule**: a slot above the baseline fires when the creature
//!    has the slay's race flag, or lacks the brand's resist flag.
//! 2. **Vulnerability rule**: a creature carrying the explicit-vulnerability
//!    flag takes `slot + 100`. Any set slot qualifies, so a x1 digging or
//!    light modifier still reaches x2.
//!
//! Only strictly greater candidates replace the running best, so numerically
//! tied outcomes keep the earlier definition.

use crate::config::CombatConfig;
use crate::flags::{FlagSet, MonsterFlag, ObjectFlag};
use crate::profile::CreatureProfile;
use crate::slays::{MODIFIER_TABLE, ModifierDef, MultiplierVector};

/// Whether a resolution is a real attack or a hypothetical one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResolveMode {
    /// A real attack: the player learns from it.
    #[default]
    Attack,
    /// Description or scoring: nothing is learned.
    Simulate,
}

impl ResolveMode {
    pub const fn from_learning(learning: bool) -> Self {
        if learning { Self::Attack } else { Self::Simulate }
    }

    pub const fn is_learning(self) -> bool {
        matches!(self, Self::Attack)
    }
}

/// Flags the identification subsystem should learn from one attack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Observations {
    /// Object flags whose modifier fired.
    pub object: FlagSet<ObjectFlag>,
    /// Creature flags revealed by the fight. Only recorded for visible
    /// creatures.
    pub lore: FlagSet<MonsterFlag>,
}

impl Observations {
    pub fn is_empty(&self) -> bool {
        self.object.is_empty() && self.lore.is_empty()
    }

    fn record(&mut self, def: &ModifierDef, creature: &CreatureProfile, lore: Option<MonsterFlag>) {
        self.object.set(def.object_flag);
        if let Some(flag) = lore.filter(|_| creature.visible) {
            self.lore.set(flag);
        }
    }
}

/// Outcome of [`resolve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Best multiplier, x100 fixed point. 100 when nothing applies.
    pub multiplier: u16,
    /// Definition that produced `multiplier`.
    pub chosen: Option<&'static ModifierDef>,
    /// Empty in [`ResolveMode::Simulate`].
    pub observed: Observations,
}

impl Resolution {
    const fn baseline() -> Self {
        Self {
            multiplier: CombatConfig::BASELINE_MULTIPLIER,
            chosen: None,
            observed: Observations {
                object: FlagSet::empty(),
                lore: FlagSet::empty(),
            },
        }
    }

    /// Returns true if some modifier beat the baseline.
    pub fn is_modified(&self) -> bool {
        self.chosen.is_some()
    }

    fn offer(&mut self, def: &'static ModifierDef, candidate: u16) {
        if candidate > self.multiplier {
            self.multiplier = candidate;
            self.chosen = Some(def);
        }
    }
}

/// Resolves `mults` against `creature`.
///
/// Pure: the inputs are not touched and the same inputs always give the same
/// resolution.
pub fn resolve(
    creature: &CreatureProfile,
    mults: &MultiplierVector,
    mode: ResolveMode,
) -> Resolution {
    let mut resolution = Resolution::baseline();

    for def in MODIFIER_TABLE.iter() {
        let slot = mults.get(def.id);
        if slot == 0 {
            continue;
        }

        if slot > CombatConfig::BASELINE_MULTIPLIER && def.fires_against(creature) {
            resolution.offer(def, slot);
            if mode.is_learning() {
                let lore = def.monster_flag.or(def.resist_flag);
                resolution.observed.record(def, creature, lore);
            }
        }

        if def.exploits_vulnerability(creature) {
            resolution.offer(def, slot.saturating_add(CombatConfig::VULNERABILITY_BONUS));
            if mode.is_learning() {
                resolution.observed.record(def, creature, def.vuln_flag);
            }
        }
    }

    tracing::trace!(
        multiplier = resolution.multiplier,
        chosen = resolution.chosen.map(|def| def.name()),
        "resolved modifiers"
    );
    resolution
}
