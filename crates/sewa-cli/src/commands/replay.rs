// crates/sewa-cli/src/commands/replay.rs
//
// `sewa replay <script.json>`: apply a scripted session and report each step,
// then show the resulting catalog.

use crate::app::App;
use crate::commands::catalog::{self, CatalogCmd};
use crate::output::{format_json, format_table, OutputFormat};
use crate::replay;

/// Run the replay subcommand.
pub async fn run(app: &mut App, path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let steps = replay::load(path)?;
    let reports = replay::run(&app.market, &mut app.labels, &app.describer, steps).await;
    let failed = reports.iter().filter(|r| !r.ok).count();

    if app.format == OutputFormat::Json {
        println!("{}", format_json(&reports));
        return Ok(());
    }

    println!("{}", format_table(&reports));
    println!("{} step(s), {} failed", reports.len(), failed);
    println!();
    catalog::run(
        app,
        &CatalogCmd {
            search: None,
            category: None,
            location: None,
        },
    )
}
