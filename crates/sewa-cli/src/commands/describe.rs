// crates/sewa-cli/src/commands/describe.rs
//
// `sewa describe --title --category --location`: ask the description
// generator for a listing blurb.

use clap::Args;
use serde::Serialize;

use sewa_core::traits::DescriptionGenerator;

use crate::app::App;
use crate::output::{format_json, OutputFormat};

#[derive(Debug, Args)]
pub struct DescribeCmd {
    /// Listing title.
    #[arg(long)]
    pub title: String,
    /// Category label.
    #[arg(long, default_value = "Lain-lain")]
    pub category: String,
    /// Location label.
    #[arg(long, default_value = "Tasek")]
    pub location: String,
}

#[derive(Serialize)]
struct Described<'a> {
    model: &'a str,
    description: String,
}

/// Run the describe subcommand.
pub async fn run(app: &App, cmd: &DescribeCmd) -> Result<(), Box<dyn std::error::Error>> {
    let description = app
        .describer
        .describe(&cmd.title, &cmd.category, &cmd.location)
        .await;

    match app.format {
        OutputFormat::Json => println!(
            "{}",
            format_json(&Described { model: app.describer.model(), description })
        ),
        OutputFormat::Table => println!("{}", description),
    }
    Ok(())
}
