//! Combination cache statistics and scores.

use anyhow::Result;
use clap::Parser;
use console::style;

use crate::utils::{DataArgs, format_multiplier};

/// Show combination cache statistics and scores
#[derive(Parser, Debug)]
pub struct Cache {
    /// List every scored combination
    #[arg(short, long)]
    verbose: bool,

    #[command(flatten)]
    data: DataArgs,
}

impl Cache {
    pub fn execute(self) -> Result<()> {
        let catalogue = self.data.load_catalogue()?;
        let cache = catalogue.cache();
        let stats = cache.stats();

        println!("{}", style("=== Combination Cache ===").bold().green());
        println!("  Buckets:       {}", stats.buckets);
        println!("  Combinations:  {}", stats.entries);
        println!("  Scored:        {}", stats.scored);
        println!("  Used buckets:  {}", stats.used_buckets);
        println!("  Longest chain: {}", stats.longest_chain);
        println!("  Reference set: {} creatures", catalogue.creatures.len());

        if !self.verbose {
            return Ok(());
        }

        println!();
        for entry in cache.entries() {
            let names: Vec<_> = entry
                .mults
                .iter()
                .map(|(def, value)| format!("{} {}", def.name(), format_multiplier(u32::from(value))))
                .collect();
            let score = entry
                .value
                .map(format_multiplier)
                .unwrap_or_else(|| "unscored".to_string());
            println!(
                "  [{:>3}] {:>8}  {}",
                cache.bucket_of(&entry.mults),
                style(score).bold(),
                names.join(", ")
            );
        }
        Ok(())
    }
}
