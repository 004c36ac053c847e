// crates/sewa-cli/src/commands/catalog.rs
//
// `sewa catalog [--search] [--category] [--location]`: the public listing
// grid, featured first, with the sponsored slot spliced in.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use sewa_catalog::{CatalogEntry, CatalogPage, CatalogQuery};
use sewa_core::ads::AdBanner;

use crate::app::App;
use crate::output::{format_json, format_table, short_id, yes_no, OutputFormat};

/// Filter value meaning "no filter".
const ALL: &str = "All";

/// Catalog filters.
#[derive(Debug, Args)]
pub struct CatalogCmd {
    /// Case-insensitive substring of the title.
    #[arg(long)]
    pub search: Option<String>,
    /// Exact category label, e.g. "Tools & Hardware". "All" disables the filter.
    #[arg(long)]
    pub category: Option<String>,
    /// Exact location label, e.g. "Precint 9". "All" disables the filter.
    #[arg(long)]
    pub location: Option<String>,
}

#[derive(Serialize)]
struct CatalogReport {
    #[serde(flatten)]
    page: CatalogPage,
    sidebar: Vec<AdBanner>,
}

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "#")]
    slot: usize,
    id: String,
    title: String,
    category: String,
    location: String,
    price: String,
    featured: &'static str,
    available: &'static str,
}

/// Run the catalog subcommand.
pub fn run(app: &App, cmd: &CatalogCmd) -> Result<(), Box<dyn std::error::Error>> {
    let query = CatalogQuery::parse(
        cmd.search.as_deref(),
        cmd.category.as_deref().filter(|c| *c != ALL),
        cmd.location.as_deref().filter(|l| *l != ALL),
    )?;
    let catalog = app.catalog();
    let page = catalog.browse(&query)?;
    let sidebar = catalog.sidebar_banners();

    if app.format == OutputFormat::Json {
        println!("{}", format_json(&CatalogReport { page, sidebar }));
        return Ok(());
    }

    if let Some(banner) = &page.top_banner {
        println!("[Iklan] {}  ({})", banner.title, banner.link_url);
        println!();
    }
    if page.listing_count == 0 {
        println!("No listings match.");
        print_sidebar(&sidebar);
        return Ok(());
    }

    let rows: Vec<EntryRow> = page
        .entries
        .iter()
        .enumerate()
        .map(|(n, entry)| match entry {
            CatalogEntry::Listing(item) => EntryRow {
                slot: n + 1,
                id: short_id(&item.id),
                title: item.title.clone(),
                category: item.category.to_string(),
                location: item.location.to_string(),
                price: item.price_label(),
                featured: yes_no(item.is_featured),
                available: yes_no(item.is_available),
            },
            CatalogEntry::Sponsored(banner) => EntryRow {
                slot: n + 1,
                id: banner.id.clone(),
                title: format!("[Iklan] {}", banner.title),
                category: String::new(),
                location: String::new(),
                price: String::new(),
                featured: "",
                available: "",
            },
        })
        .collect();
    println!("{}", format_table(&rows));
    println!("{} listing(s)", page.listing_count);
    print_sidebar(&sidebar);
    Ok(())
}

fn print_sidebar(banners: &[AdBanner]) {
    if banners.is_empty() {
        return;
    }
    println!();
    for banner in banners {
        println!("[Iklan sisi] {}  ({})", banner.title, banner.link_url);
    }
}
