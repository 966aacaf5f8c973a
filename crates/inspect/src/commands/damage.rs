//! Damage breakdown of an equipment template.

use anyhow::{Result, anyhow};
use clap::Parser;
use console::style;

use combat_core::{AttackKind, weapon_breakdown};

use crate::utils::{DataArgs, format_multiplier, format_tenths};

/// Show the damage breakdown of an equipment template
#[derive(Parser, Debug)]
pub struct Damage {
    /// Equipment template name (case-insensitive)
    #[arg(value_name = "TEMPLATE")]
    template: String,

    /// Override blows or shots per round, x10 (e.g. 25 for 2.5)
    #[arg(short, long, value_name = "RATE")]
    rate: Option<u16>,

    #[command(flatten)]
    data: DataArgs,
}

impl Damage {
    pub fn execute(self) -> Result<()> {
        let catalogue = self.data.load_catalogue()?;
        let item = catalogue
            .equipment(&self.template)
            .ok_or_else(|| anyhow!("Unknown equipment template: {}", self.template))?;

        let attack = match (item.attack, self.rate) {
            (AttackKind::Melee { .. }, Some(blows)) => AttackKind::Melee { blows },
            (AttackKind::Ranged { .. }, Some(shots)) => AttackKind::Ranged { shots },
            (attack, None) => attack,
        };
        let unit = if attack.is_ranged() { "shots" } else { "blows" };
        let breakdown = weapon_breakdown(&item.profile, attack);

        println!(
            "{} {} ({}d{}, {:+} to-dam, {} {})",
            style("Damage:").bold().cyan(),
            style(&item.name).yellow(),
            item.profile.dice.count,
            item.profile.dice.sides,
            item.profile.to_dam,
            format_tenths(u32::from(attack.rate())),
            unit
        );
        for entry in &breakdown.entries {
            println!(
                "  {:<32} {:>6}  {:>6}/round",
                entry.label(),
                format_multiplier(u32::from(entry.multiplier)),
                format_tenths(entry.display_tenths())
            );
        }
        println!(
            "  {:<32} {:>6}  {:>6}/round",
            "best case",
            "",
            format_tenths(breakdown.best.max(0).unsigned_abs())
        );

        if let Some(power) = catalogue.power_of(item) {
            println!("  {:<32} {:>6}", "slay power", format_multiplier(power));
        }
        Ok(())
    }
}
