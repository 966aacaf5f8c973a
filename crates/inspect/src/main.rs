//! Inspection tools for combat data.
//!
//! Loads the combat catalogue from a data directory and prints resolutions,
//! damage breakdowns, cache statistics and the flag registry.
//! Run with: `cargo run -p combat-inspect -- <command>`

mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{Cache, Damage, Flags, Resolve};
use tracing_subscriber::EnvFilter;

/// Inspection tools for combat data
#[derive(Parser)]
#[command(name = "combat-inspect")]
#[command(about = "Inspect slay and brand resolution", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Resolve an equipment template against a creature
    Resolve(Resolve),

    /// Show the damage breakdown of an equipment template
    Damage(Damage),

    /// Show combination cache statistics and scores
    Cache(Cache),

    /// Dump the object flag registry
    Flags(Flags),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for COMBAT_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Resolve(cmd) => cmd.execute(),
        Command::Damage(cmd) => cmd.execute(),
        Command::Cache(cmd) => cmd.execute(),
        Command::Flags(cmd) => cmd.execute(),
    }
}
