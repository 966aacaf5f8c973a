//! Utility functions for inspect commands

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use combat_content::{Catalogue, ContentFactory};

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "COMBAT_DATA_DIR";

/// Data directory selection shared by every command.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Directory holding combat.toml, equipment.ron and creatures.ron
    /// (defaults to $COMBAT_DATA_DIR, then ./data)
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

impl DataArgs {
    pub fn resolve_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("data"))
    }

    pub fn load_catalogue(&self) -> Result<Catalogue> {
        let dir = self.resolve_dir();
        ContentFactory::new(&dir)
            .build_catalogue()
            .with_context(|| format!("Failed to load combat data from {}", dir.display()))
    }
}

/// Formats a x100 multiplier as `x3.00`.
pub fn format_multiplier(multiplier: u32) -> String {
    format!("x{}.{:02}", multiplier / 100, multiplier % 100)
}

/// Formats tenths as `12.5`.
pub fn format_tenths(tenths: u32) -> String {
    format!("{}.{}", tenths / 10, tenths % 10)
}
