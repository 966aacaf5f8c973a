//! Object flag registry dump.

use anyhow::Result;
use clap::Parser;
use console::style;

use combat_core::{FlagKind, FlagKinds, FlagRegistry, build_kind_mask, registry::kind_name};

use crate::utils::DataArgs;

/// Dump the object flag registry
#[derive(Parser, Debug)]
pub struct Flags {
    /// Only show flags of this kind (e.g. slay, brand, curse)
    #[arg(short, long, value_name = "KIND")]
    kind: Option<FlagKind>,

    /// Rune seed (defaults to the configured seed)
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    #[command(flatten)]
    data: DataArgs,
}

impl Flags {
    pub fn execute(self) -> Result<()> {
        let seed = match self.seed {
            Some(seed) => seed,
            None => self.data.load_catalogue()?.config.rune_seed,
        };
        let registry = FlagRegistry::new(seed);
        let mask = match self.kind {
            Some(kind) => build_kind_mask(kind.into()),
            None => build_kind_mask(FlagKinds::all()),
        };

        println!(
            "{} (seed {})",
            style("=== Object Flags ===").bold().green(),
            seed
        );
        for (info, rune) in registry.iter().filter(|(info, _)| mask.test(info.flag)) {
            println!(
                "  {:<14} {:<22} {:<10} {}{}",
                info.flag.as_ref(),
                info.name,
                kind_name(info.kind),
                style(rune).magenta(),
                if info.uses_pval { "  (pval)" } else { "" }
            );
        }
        Ok(())
    }
}
