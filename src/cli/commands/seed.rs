//! Insert the sample board

use colored::Colorize;

use crate::cli::app::Context;
use shiptivity::adapters::sqlite;
use shiptivity::output::{OutputMode, render_json};

/// Seed the configured database with the sample clients
pub fn seed(ctx: &Context, force: bool) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let report = sqlite::seed(&store, force)?;

    match ctx.mode {
        OutputMode::Json => render_json(&report),
        OutputMode::Human => {
            if report.inserted == 0 && !force {
                println!(
                    "Board already has {} client(s); nothing seeded.",
                    report.existing
                );
                println!("Use --force to add any missing sample clients.");
            } else {
                println!(
                    "{} {} sample client(s) into {}",
                    "Seeded".green(),
                    report.inserted,
                    ctx.config.database.path.display()
                );
                if report.existing > 0 {
                    println!("  {} already present", report.existing);
                }
                if report.renumbered > 0 {
                    println!("  {} client(s) renumbered", report.renumbered);
                }
            }
        },
    }
    Ok(())
}
