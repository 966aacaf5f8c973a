//! Content factory for building the catalogue from data files.

use std::path::{Path, PathBuf};

use combat_core::CombatConfig;

use crate::catalogue::{Catalogue, Creature, Equipment};
use crate::loaders::{ConfigLoader, CreatureLoader, EquipmentLoader, LoadResult};

/// Content factory that loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── combat.toml
/// ├── equipment.ron
/// └── creatures.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load combat configuration from `combat.toml`.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        let path = self.data_dir.join("combat.toml");
        ConfigLoader::load(&path)
    }

    /// Load equipment templates from `equipment.ron`.
    pub fn load_equipment(&self) -> LoadResult<Vec<Equipment>> {
        let path = self.data_dir.join("equipment.ron");
        EquipmentLoader::load(&path)
    }

    /// Load reference creatures from `creatures.ron`.
    pub fn load_creatures(&self) -> LoadResult<Vec<Creature>> {
        let path = self.data_dir.join("creatures.ron");
        CreatureLoader::load(&path)
    }

    /// Load everything and build the scored catalogue.
    pub fn build_catalogue(&self) -> LoadResult<Catalogue> {
        let config = self.load_config()?;
        let equipment = self.load_equipment()?;
        let creatures = self.load_creatures()?;
        let catalogue = Catalogue::build(config, equipment, creatures)?;
        Ok(catalogue)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn test_build_catalogue() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        std::fs::write(dir.join("combat.toml"), "cache_buckets = 13\n").unwrap();
        std::fs::write(
            dir.join("equipment.ron"),
            r#"(templates: [
                (name: "Spear of Fire", dice: (count: 1, sides: 6), flags: [brand_fire]),
                (name: "Club", dice: (count: 1, sides: 5)),
            ])"#,
        )
        .unwrap();
        std::fs::write(
            dir.join("creatures.ron"),
            r#"(creatures: [
                (name: "Fire hound", flags: [animal, im_fire]),
                (name: "Snaga", flags: [orc, evil]),
            ])"#,
        )
        .unwrap();

        let catalogue = ContentFactory::new(dir).build_catalogue().unwrap();
        assert_eq!(catalogue.config.cache_buckets, 13);
        assert_eq!(catalogue.cache().len(), 1);

        let spear = catalogue.equipment("spear of fire").unwrap();
        assert_eq!(catalogue.power_of(spear), Some(200));
    }

    #[test]
    fn test_missing_directory() {
        let factory = ContentFactory::new("/nonexistent/combat-data");
        assert!(factory.build_catalogue().is_err());
    }
}
