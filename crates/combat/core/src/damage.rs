//! Average damage figures for object descriptions.
//!
//! Everything is fixed point: damage in tenths of a point, multipliers x100,
//! blows and shots x10. Intermediate values may go negative (a large
//! negative to-dam); only [`DamageEntry::display_tenths`] clamps at zero.
//! Products are taken in `i64` and saturate to the `i32` range.

use crate::config::CombatConfig;
use crate::profile::{Dice, WeaponProfile};
use crate::rng::{RngOracle, compute_seed};
use crate::slays::{ModifierDef, MultiplierVector};

/// How the weapon is used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttackKind {
    /// Blows per round, x10.
    Melee { blows: u16 },
    /// Shots per round, x10.
    Ranged { shots: u16 },
}

impl AttackKind {
    /// Attacks per round, x10.
    pub const fn rate(self) -> u16 {
        match self {
            Self::Melee { blows } => blows,
            Self::Ranged { shots } => shots,
        }
    }

    pub const fn is_ranged(self) -> bool {
        matches!(self, Self::Ranged { .. })
    }
}

fn hit_tenths(dice: Dice, to_dam: i16, multiplier: u16) -> i64 {
    i64::from(dice.average_tenths()) * i64::from(multiplier)
        / i64::from(CombatConfig::BASELINE_MULTIPLIER)
        + i64::from(to_dam) * 10
}

fn saturate(tenths: i64) -> i32 {
    i32::try_from(tenths).unwrap_or(if tenths < 0 { i32::MIN } else { i32::MAX })
}

/// Average damage of one hit, in tenths.
pub fn average_hit(dice: Dice, to_dam: i16, multiplier: u16) -> i32 {
    saturate(hit_tenths(dice, to_dam, multiplier))
}

/// Average damage per round, in tenths.
pub fn average_damage(dice: Dice, to_dam: i16, multiplier: u16, attack: AttackKind) -> i32 {
    saturate(hit_tenths(dice, to_dam, multiplier) * i64::from(attack.rate()) / 10)
}

/// One line of a damage description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageEntry {
    /// `None` for the unmodified baseline.
    pub modifier: Option<&'static ModifierDef>,
    pub multiplier: u16,
    /// Per round, in tenths. May be negative.
    pub tenths: i32,
}

impl DamageEntry {
    /// Damage for display, never below zero.
    pub fn display_tenths(&self) -> u32 {
        self.tenths.max(0).unsigned_abs()
    }

    /// Label for the description renderer.
    pub fn label(&self) -> &'static str {
        self.modifier.map_or("normal", ModifierDef::name)
    }
}

/// All damage lines for a weapon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DamageBreakdown {
    /// Baseline first, then one entry per set slot in table order.
    pub entries: Vec<DamageEntry>,
    /// Highest per-round figure over all entries, in tenths.
    pub best: i32,
}

impl DamageBreakdown {
    pub fn baseline(&self) -> Option<&DamageEntry> {
        self.entries.first()
    }
}

/// Damage per round for the baseline and for each modifier in `mults`.
pub fn damage_breakdown(
    dice: Dice,
    to_dam: i16,
    mults: &MultiplierVector,
    attack: AttackKind,
) -> DamageBreakdown {
    let baseline = DamageEntry {
        modifier: None,
        multiplier: CombatConfig::BASELINE_MULTIPLIER,
        tenths: average_damage(dice, to_dam, CombatConfig::BASELINE_MULTIPLIER, attack),
    };

    let entries: Vec<_> = core::iter::once(baseline)
        .chain(mults.iter().map(|(def, multiplier)| DamageEntry {
            modifier: Some(def),
            multiplier,
            tenths: average_damage(dice, to_dam, multiplier, attack),
        }))
        .collect();
    let best = entries
        .iter()
        .map(|entry| entry.tenths)
        .max()
        .unwrap_or(baseline.tenths);

    DamageBreakdown { entries, best }
}

/// Breakdown for one weapon's own modifiers.
pub fn weapon_breakdown(weapon: &WeaponProfile, attack: AttackKind) -> DamageBreakdown {
    damage_breakdown(
        weapon.dice,
        weapon.to_dam,
        &MultiplierVector::from_weapon(weapon),
        attack,
    )
}

/// Rolls one hit: each die is drawn from `rng`, the sum is scaled by
/// `multiplier` and the flat bonus is added. Whole points, never negative.
pub fn roll_damage(
    dice: Dice,
    to_dam: i16,
    multiplier: u16,
    rng: &impl RngOracle,
    seed: u64,
) -> u32 {
    let rolled: u64 = (0..u32::from(dice.count))
        .map(|die| u64::from(rng.roll_die(compute_seed(seed, 0, die, 0), u32::from(dice.sides))))
        .sum();
    let scaled = rolled * u64::from(multiplier) / u64::from(CombatConfig::BASELINE_MULTIPLIER);
    let total = i64::try_from(scaled).unwrap_or(i64::MAX) + i64::from(to_dam);
    u32::try_from(total.max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::ObjectFlag;
    use crate::registry::EquipSlot;
    use crate::rng::PcgRng;
    use crate::slays::ModifierId;

    #[test]
    fn plain_hit_is_dice_plus_bonus() {
        // 2d5 averages 6.0; +3 to-dam.
        assert_eq!(average_hit(Dice::new(2, 5), 3, 100), 90);
        // x3 applies to the dice only.
        assert_eq!(average_hit(Dice::new(2, 5), 3, 300), 210);
    }

    #[test]
    fn blows_scale_per_round() {
        let dice = Dice::new(1, 4);
        let one_and_a_half = AttackKind::Melee { blows: 15 };
        assert_eq!(average_damage(dice, 0, 100, one_and_a_half), 37);
        assert_eq!(average_damage(dice, 0, 200, AttackKind::Ranged { shots: 10 }), 50);
    }

    #[test]
    fn huge_multipliers_do_not_wrap() {
        // 100d100 averages 5050.0; x655.35 leaves the i32 range before the
        // divide but not after.
        let dice = Dice::new(100, 100);
        assert_eq!(average_hit(dice, 0, u16::MAX), 33_095_175);
        assert_eq!(
            average_damage(dice, 0, u16::MAX, AttackKind::Melee { blows: 10 }),
            33_095_175
        );

        let per_round = average_damage(dice, 0, u16::MAX, AttackKind::Melee { blows: u16::MAX });
        assert_eq!(per_round, i32::MAX);
        let per_round = average_damage(dice, i16::MIN, 100, AttackKind::Ranged { shots: u16::MAX });
        assert!(per_round < 0);

        let slain = roll_damage(Dice::new(255, 255), 0, u16::MAX, &PcgRng, 3);
        assert!(slain > 0);
    }

    #[test]
    fn breakdown_lists_baseline_then_modifiers() {
        let weapon = WeaponProfile::new(Dice::new(2, 5), EquipSlot::Weapon)
            .with_flag(ObjectFlag::SlayEvil)
            .with_flag(ObjectFlag::BrandFire);
        let breakdown = weapon_breakdown(&weapon, AttackKind::Melee { blows: 10 });

        let labels: Vec<_> = breakdown.entries.iter().map(DamageEntry::label).collect();
        assert_eq!(labels, vec!["normal", "evil creatures", "flames"]);
        assert_eq!(breakdown.baseline().map(|entry| entry.tenths), Some(60));
        assert_eq!(breakdown.best, 180);
        assert_eq!(breakdown.entries[2].modifier.map(|def| def.id), Some(ModifierId::Fire3));
    }

    #[test]
    fn negative_damage_is_clamped_for_display() {
        let breakdown = damage_breakdown(
            Dice::new(1, 2),
            -5,
            &MultiplierVector::new(),
            AttackKind::Melee { blows: 10 },
        );
        let baseline = breakdown.entries[0];
        assert_eq!(baseline.tenths, -35);
        assert_eq!(baseline.display_tenths(), 0);
        assert_eq!(breakdown.best, -35);
    }

    #[test]
    fn rolls_stay_in_range() {
        let dice = Dice::new(2, 6);
        for seed in 0..100 {
            let plain = roll_damage(dice, 0, 100, &PcgRng, seed);
            assert!((2..=12).contains(&plain));
            let slain = roll_damage(dice, 0, 300, &PcgRng, seed);
            assert_eq!(slain, plain * 3);
        }
        assert_eq!(roll_damage(dice, -100, 100, &PcgRng, 7), 0);
    }
}
