//! Content loaders for reading combat data from files.
//!
//! Each loader turns one RON/TOML file into combat-core types; the
//! [`ContentFactory`] ties them together into a [`crate::Catalogue`].

pub mod config;
pub mod creatures;
pub mod equipment;
pub mod factory;

pub use config::ConfigLoader;
pub use creatures::{CreatureLoader, CreatureTemplate};
pub use equipment::{EquipmentLoader, EquipmentTemplate, PvalSpec};
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
