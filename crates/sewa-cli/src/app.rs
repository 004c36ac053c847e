// crates/sewa-cli/src/app.rs
//
// Process-wide state for one CLI invocation: the marketplace, the label
// table, the sponsor feed, and the description generator.

use std::time::Duration;

use sewa_catalog::{CatalogView, SponsoredFeed};
use sewa_core::error::SewaError;
use sewa_describe::GeminiDescriber;
use sewa_workflow::Marketplace;

use crate::config::SewaConfig;
use crate::labels::Labels;
use crate::output::OutputFormat;
use crate::seed;

pub struct App {
    pub market: Marketplace,
    pub labels: Labels,
    pub feed: SponsoredFeed,
    pub describer: GeminiDescriber,
    pub format: OutputFormat,
}

impl App {
    pub fn build(config: &SewaConfig, format: OutputFormat) -> Result<Self, SewaError> {
        let market = Marketplace::new();
        let mut labels = Labels::default();
        if config.seed_demo_data {
            seed::seed_demo_data(&market, &mut labels)?;
        }

        let describer = GeminiDescriber::new(
            config.api_key(),
            config.describe_model.clone(),
            Duration::from_secs(config.describe_timeout_secs),
        );
        if !describer.is_configured() {
            tracing::debug!("No description API key; generation will return a placeholder");
        }

        Ok(Self {
            market,
            labels,
            feed: config.feed(),
            describer,
            format,
        })
    }

    pub fn catalog(&self) -> CatalogView {
        self.market.catalog(self.feed.clone())
    }
}
