//! Loaded combat content plus its scored combination cache.

use combat_core::{
    AttackKind, CombatConfig, CombatResult, CombinationCache, CreatureProfile, MultiplierVector,
    WeaponProfile, score_cache,
};

/// A named equipment template ready for resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Equipment {
    pub name: String,
    pub profile: WeaponProfile,
    /// Blows or shots per round.
    pub attack: AttackKind,
}

impl Equipment {
    pub fn multipliers(&self) -> MultiplierVector {
        MultiplierVector::from_weapon(&self.profile)
    }
}

/// A named reference creature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Creature {
    pub name: String,
    pub profile: CreatureProfile,
}

/// Everything the combat tools need, loaded once.
#[derive(Clone, Debug)]
pub struct Catalogue {
    pub config: CombatConfig,
    pub equipment: Vec<Equipment>,
    pub creatures: Vec<Creature>,
    cache: CombinationCache,
}

impl Catalogue {
    /// Builds the combination cache from `equipment` and scores it against
    /// `creatures`.
    pub fn build(
        config: CombatConfig,
        equipment: Vec<Equipment>,
        creatures: Vec<Creature>,
    ) -> CombatResult<Self> {
        let mut cache = CombinationCache::from_templates(
            config.cache_buckets,
            equipment.iter().map(|item| &item.profile),
        )?;
        let references: Vec<_> = creatures.iter().map(|creature| creature.profile).collect();
        score_cache(&mut cache, &references);

        tracing::info!(
            equipment = equipment.len(),
            creatures = creatures.len(),
            combinations = cache.len(),
            "combat catalogue ready"
        );

        Ok(Self {
            config,
            equipment,
            creatures,
            cache,
        })
    }

    pub fn cache(&self) -> &CombinationCache {
        &self.cache
    }

    /// Equipment template by name (case-insensitive).
    pub fn equipment(&self, name: &str) -> Option<&Equipment> {
        self.equipment
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name))
    }

    /// Reference creature by name (case-insensitive).
    pub fn creature(&self, name: &str) -> Option<&Creature> {
        self.creatures
            .iter()
            .find(|creature| creature.name.eq_ignore_ascii_case(name))
    }

    /// Slay power of a template, if it carries any modifier.
    pub fn power_of(&self, item: &Equipment) -> Option<u32> {
        self.cache.get(&item.multipliers())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{Dice, EquipSlot, MonsterFlag, ObjectFlag};

    fn sample() -> Catalogue {
        let equipment = vec![
            Equipment {
                name: "Dagger".into(),
                profile: WeaponProfile::new(Dice::new(1, 4), EquipSlot::Weapon),
                attack: AttackKind::Melee { blows: 20 },
            },
            Equipment {
                name: "Dagger of Orc Bane".into(),
                profile: WeaponProfile::new(Dice::new(1, 4), EquipSlot::Weapon)
                    .with_flag(ObjectFlag::SlayOrc),
                attack: AttackKind::Melee { blows: 20 },
            },
        ];
        let creatures = vec![
            Creature {
                name: "Cave orc".into(),
                profile: CreatureProfile::from_flags(&[MonsterFlag::Orc, MonsterFlag::Evil]),
            },
            Creature {
                name: "Jackal".into(),
                profile: CreatureProfile::from_flags(&[MonsterFlag::Animal]),
            },
        ];
        Catalogue::build(CombatConfig::default(), equipment, creatures).unwrap()
    }

    #[test]
    fn build_scores_every_combination() {
        let catalogue = sample();
        assert_eq!(catalogue.cache().len(), 1);
        assert!(catalogue.cache().unscored().is_empty());

        let bane = catalogue.equipment("dagger of orc bane").unwrap();
        assert_eq!(catalogue.power_of(bane), Some(200));

        let plain = catalogue.equipment("Dagger").unwrap();
        assert_eq!(catalogue.power_of(plain), None);
    }

    #[test]
    fn lookups_by_name() {
        let catalogue = sample();
        assert!(catalogue.creature("cave ORC").is_some());
        assert!(catalogue.creature("Balrog").is_none());
    }

    #[test]
    fn zero_buckets_fail_the_build() {
        let config = CombatConfig {
            cache_buckets: 0,
            ..CombatConfig::default()
        };
        assert!(Catalogue::build(config, Vec::new(), Vec::new()).is_err());
    }
}
