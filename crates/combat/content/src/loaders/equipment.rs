//! Equipment template loader.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use combat_core::{AttackKind, Dice, EquipSlot, ObjectFlag, WeaponProfile};
use serde::{Deserialize, Serialize};

use crate::catalogue::Equipment;
use crate::loaders::{LoadResult, read_file};

/// Flags graded by one pval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PvalSpec {
    pub value: i16,
    pub flags: Vec<ObjectFlag>,
}

/// One equipment template as written in `equipment.ron`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentTemplate {
    pub name: String,
    #[serde(default)]
    pub slot: EquipSlot,
    #[serde(default)]
    pub flags: Vec<ObjectFlag>,
    #[serde(default)]
    pub pvals: Vec<PvalSpec>,
    #[serde(default)]
    pub dice: Dice,
    #[serde(default)]
    pub to_dam: i16,
    /// Blows (melee) or shots (ranged) per round, x10.
    #[serde(default = "default_rate")]
    pub rate: u16,
}

fn default_rate() -> u16 {
    10
}

impl EquipmentTemplate {
    /// Launchers and carried missiles attack at range.
    pub fn attack(&self) -> AttackKind {
        match self.slot {
            EquipSlot::Bow | EquipSlot::Pack => AttackKind::Ranged { shots: self.rate },
            _ => AttackKind::Melee { blows: self.rate },
        }
    }

    pub fn profile(&self) -> LoadResult<WeaponProfile> {
        let mut profile = WeaponProfile::new(self.dice, self.slot).with_to_dam(self.to_dam);
        for &flag in &self.flags {
            profile.flags.set(flag);
        }
        for spec in &self.pvals {
            for &flag in &spec.flags {
                profile
                    .add_pval(flag, spec.value)
                    .with_context(|| format!("template `{}`", self.name))?;
            }
        }
        Ok(profile)
    }

    pub fn into_equipment(self) -> LoadResult<Equipment> {
        Ok(Equipment {
            profile: self.profile()?,
            attack: self.attack(),
            name: self.name,
        })
    }
}

/// Equipment catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentCatalog {
    pub templates: Vec<EquipmentTemplate>,
}

/// Loader for equipment templates from RON files.
pub struct EquipmentLoader;

impl EquipmentLoader {
    /// Load equipment templates from a RON file.
    ///
    /// Templates repeating an earlier name are skipped with a warning.
    pub fn load(path: &Path) -> LoadResult<Vec<Equipment>> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Equipment>> {
        let catalog: EquipmentCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse equipment catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        let mut equipment = Vec::with_capacity(catalog.templates.len());
        for template in catalog.templates {
            if !seen.insert(template.name.to_ascii_lowercase()) {
                tracing::warn!(name = %template.name, "duplicate equipment template skipped");
                continue;
            }
            equipment.push(template.into_equipment()?);
        }
        Ok(equipment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CATALOG: &str = r#"(
        templates: [
            (
                name: "Long Sword",
                dice: (count: 2, sides: 5),
                rate: 15,
            ),
            (
                name: "Westernesse Blade",
                dice: (count: 2, sides: 5),
                to_dam: 6,
                flags: [slay_orc, slay_troll, slay_giant],
                pvals: [(value: 2, flags: [str, dex])],
            ),
            (
                name: "Arrow of Flame",
                slot: pack,
                dice: (count: 1, sides: 9),
                flags: [brand_fire],
            ),
            (
                name: "long sword",
                dice: (count: 9, sides: 9),
            ),
        ],
    )"#;

    #[test]
    fn test_parse_catalog() {
        let equipment = EquipmentLoader::parse(CATALOG).unwrap();
        assert_eq!(equipment.len(), 3);

        let sword = &equipment[0];
        assert_eq!(sword.profile.dice, Dice::new(2, 5));
        assert_eq!(sword.attack, AttackKind::Melee { blows: 15 });

        let blade = &equipment[1];
        assert!(blade.profile.flags.test(ObjectFlag::SlayTroll));
        assert_eq!(blade.profile.pval_of(ObjectFlag::Dex), Some(2));
        assert_eq!(blade.profile.to_dam, 6);

        let arrow = &equipment[2];
        assert_eq!(arrow.attack, AttackKind::Ranged { shots: 10 });
    }

    #[test]
    fn test_too_many_pvals_is_an_error() {
        let catalog = r#"(
            templates: [(
                name: "Overloaded",
                pvals: [
                    (value: 1, flags: [str]),
                    (value: 2, flags: [dex]),
                    (value: 3, flags: [con]),
                    (value: 4, flags: [speed]),
                ],
            )],
        )"#;
        let err = EquipmentLoader::parse(catalog).unwrap_err();
        assert!(format!("{err:#}").contains("Overloaded"));
    }

    #[test]
    fn test_unknown_flag_is_a_parse_error() {
        let catalog = r#"(templates: [(name: "Odd", flags: [slay_kobold])])"#;
        assert!(EquipmentLoader::parse(catalog).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("equipment.ron");
        std::fs::write(&path, CATALOG).unwrap();

        let equipment = EquipmentLoader::load(&path).unwrap();
        assert_eq!(equipment.len(), 3);
    }
}
