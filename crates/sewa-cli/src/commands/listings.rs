// crates/sewa-cli/src/commands/listings.rs
//
// `sewa listings [--status]`: admin view of every listing in every status.

use clap::Args;
use tabled::Tabled;

use sewa_core::item::ItemStatus;

use crate::app::App;
use crate::output::{format_json, format_table, short_id, yes_no, OutputFormat};

#[derive(Debug, Args)]
pub struct ListingsCmd {
    /// Only show listings in this status: pending, active, rejected.
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Tabled)]
struct ListingRow {
    id: String,
    title: String,
    owner: String,
    status: String,
    price: String,
    featured: &'static str,
    available: &'static str,
}

/// Run the listings subcommand.
pub fn run(app: &App, cmd: &ListingsCmd) -> Result<(), Box<dyn std::error::Error>> {
    let status = cmd
        .status
        .as_deref()
        .map(str::parse::<ItemStatus>)
        .transpose()?;
    let rows: Vec<_> = app
        .market
        .moderation()
        .listings()?
        .into_iter()
        .filter(|row| status.map_or(true, |s| row.item.status == s))
        .collect();

    if app.format == OutputFormat::Json {
        println!("{}", format_json(&rows));
        return Ok(());
    }

    let table: Vec<ListingRow> = rows
        .iter()
        .map(|row| ListingRow {
            id: short_id(&row.item.id),
            title: row.item.title.clone(),
            owner: row.owner_name.clone().unwrap_or_else(|| "(unknown)".to_string()),
            status: row.item.status.to_string(),
            price: row.item.price_label(),
            featured: yes_no(row.item.is_featured),
            available: yes_no(row.item.is_available),
        })
        .collect();
    println!("{}", format_table(&table));
    Ok(())
}
