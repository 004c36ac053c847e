// crates/sewa-cli/src/main.rs
//
// CLI entrypoint for the SewaLokal rental catalog.
//
// Each invocation builds an in-memory marketplace (optionally seeded with the
// demo accounts and listings), optionally applies a replay script, and then
// runs one subcommand against it.

mod app;
mod commands;
mod config;
mod labels;
mod output;
mod replay;
mod seed;

use clap::{Parser, Subcommand};
use commands::catalog::CatalogCmd;
use commands::describe::DescribeCmd;
use commands::listings::ListingsCmd;

use app::App;
use config::SewaConfig;
use output::OutputFormat;

/// SewaLokal: neighbourhood rental catalog.
#[derive(Parser, Debug)]
#[command(
    name = "sewa",
    version = "0.1.0",
    about = "SewaLokal CLI: browse the rental catalog, inspect listings and owners, replay marketplace sessions"
)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, global = true)]
    config: Option<String>,

    /// Emit JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    /// Replay script applied before the subcommand runs.
    #[arg(long, global = true)]
    script: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Public catalog: active listings, featured first, with sponsors.
    Catalog(CatalogCmd),

    /// One listing with its owner and contact link.
    Item {
        /// Listing UUID or @label.
        reference: String,
    },

    /// An owner's public profile and active listings.
    Profile {
        /// User UUID or @label.
        reference: String,
    },

    /// Every account with its trust score.
    Users,

    /// Every listing in every status (admin view).
    Listings(ListingsCmd),

    /// Generate a listing description.
    Describe(DescribeCmd),

    /// Apply a replay script and report each step.
    Replay {
        /// Path to the JSON script.
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Config is read before logging starts so its log level applies; the
    // outcome is reported once the subscriber is up.
    let loaded = cli.config.as_deref().map(|path| (path, SewaConfig::load(path)));
    let config = match &loaded {
        Some((_, Ok(cfg))) => cfg.clone(),
        _ => SewaConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match &loaded {
        Some((path, Ok(_))) => tracing::info!("Loaded configuration from {}", path),
        Some((path, Err(e))) => {
            tracing::warn!("Could not load config from {}: {}. Using defaults.", path, e)
        }
        None => tracing::debug!("No config file given. Using defaults."),
    }

    let mut app = App::build(&config, OutputFormat::from_flag(cli.json))?;

    if let Some(path) = &cli.script {
        let steps = replay::load(path)?;
        let reports = replay::run(&app.market, &mut app.labels, &app.describer, steps).await;
        let failed = reports.iter().filter(|r| !r.ok).count();
        if failed > 0 {
            tracing::warn!("{} of {} script step(s) failed", failed, reports.len());
        }
    }

    match &cli.command {
        Commands::Catalog(cmd) => commands::catalog::run(&app, cmd)?,
        Commands::Item { reference } => commands::item::run(&app, reference)?,
        Commands::Profile { reference } => commands::profile::run(&app, reference)?,
        Commands::Users => commands::users::run(&app)?,
        Commands::Listings(cmd) => commands::listings::run(&app, cmd)?,
        Commands::Describe(cmd) => commands::describe::run(&app, cmd).await?,
        Commands::Replay { path } => commands::replay::run(&mut app, path).await?,
    }

    Ok(())
}
