//! Reference creature loader.

use std::path::Path;

use combat_core::{CreatureProfile, FlagSet, MonsterFlag};
use serde::{Deserialize, Serialize};

use crate::catalogue::Creature;
use crate::loaders::{LoadResult, read_file};

/// One reference creature as written in `creatures.ron`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureTemplate {
    pub name: String,
    #[serde(default)]
    pub flags: Vec<MonsterFlag>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl CreatureTemplate {
    pub fn into_creature(self) -> Creature {
        let mut profile = CreatureProfile::new(self.flags.iter().copied().collect::<FlagSet<_>>());
        profile.visible = self.visible;
        Creature {
            name: self.name,
            profile,
        }
    }
}

/// Creature catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatureCatalog {
    pub creatures: Vec<CreatureTemplate>,
}

/// Loader for reference creatures from RON files.
pub struct CreatureLoader;

impl CreatureLoader {
    /// Load reference creatures from a RON file.
    ///
    /// Unnamed entries are skipped with a warning.
    pub fn load(path: &Path) -> LoadResult<Vec<Creature>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Creature>> {
        let catalog: CreatureCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse creature catalog RON: {}", e))?;

        Ok(catalog
            .creatures
            .into_iter()
            .filter(|template| {
                let named = !template.name.trim().is_empty();
                if !named {
                    tracing::warn!("unnamed reference creature skipped");
                }
                named
            })
            .map(CreatureTemplate::into_creature)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_creatures() {
        let creatures = CreatureLoader::parse(
            r#"(
                creatures: [
                    (name: "Cave orc", flags: [orc, evil, male]),
                    (name: "Ghost", flags: [undead, evil, invisible], visible: false),
                    (name: "", flags: [animal]),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(creatures.len(), 2);
        assert!(creatures[0].profile.has(MonsterFlag::Orc));
        assert!(creatures[0].profile.visible);
        assert!(!creatures[1].profile.visible);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("creatures.ron");
        std::fs::write(&path, r#"(creatures: [(name: "Wolf", flags: [animal])])"#).unwrap();

        let creatures = CreatureLoader::load(&path).unwrap();
        assert_eq!(creatures[0].name, "Wolf");
    }

    #[test]
    fn test_malformed_file() {
        assert!(CreatureLoader::parse("(creatures: [(flags: [orc])])").is_err());
    }
}
