//! Resolve an equipment template against a reference creature.

use anyhow::{Result, anyhow};
use clap::Parser;
use console::style;

use combat_core::{ResolveMode, resolve};

use crate::utils::{DataArgs, format_multiplier};

/// Resolve an equipment template against a creature
#[derive(Parser, Debug)]
pub struct Resolve {
    /// Equipment template name (case-insensitive)
    #[arg(value_name = "TEMPLATE")]
    template: String,

    /// Reference creature name (case-insensitive)
    #[arg(value_name = "CREATURE")]
    creature: String,

    /// Resolve as a simulation, learning nothing
    #[arg(long)]
    simulate: bool,

    #[command(flatten)]
    data: DataArgs,
}

impl Resolve {
    pub fn execute(self) -> Result<()> {
        let catalogue = self.data.load_catalogue()?;
        let item = catalogue
            .equipment(&self.template)
            .ok_or_else(|| anyhow!("Unknown equipment template: {}", self.template))?;
        let creature = catalogue
            .creature(&self.creature)
            .ok_or_else(|| anyhow!("Unknown creature: {}", self.creature))?;

        let mode = if self.simulate {
            ResolveMode::Simulate
        } else {
            ResolveMode::from_learning(catalogue.config.learning)
        };
        let resolution = resolve(&creature.profile, &item.multipliers(), mode);

        println!(
            "{} {} vs {}",
            style("Resolution:").bold().cyan(),
            style(&item.name).yellow(),
            style(&creature.name).yellow()
        );
        let multiplier = format_multiplier(u32::from(resolution.multiplier));
        if !resolution.is_modified() {
            println!("  Multiplier: {}", style(multiplier).dim());
            println!("  Modifier:   {}", style("none").dim());
            return Ok(());
        }
        println!("  Multiplier: {}", style(multiplier).bold());
        if let Some(def) = resolution.chosen {
            println!(
                "  Modifier:   {} ({} {})",
                style(def.name()).green(),
                def.verb(item.attack.is_ranged()),
                def.desc
            );
        }

        if resolution.observed.is_empty() {
            return Ok(());
        }
        println!();
        println!("{}", style("Observed:").bold().cyan());
        for flag in &resolution.observed.object {
            println!("  object  {}", flag);
        }
        for flag in &resolution.observed.lore {
            println!("  lore    {}", flag);
        }
        Ok(())
    }
}
