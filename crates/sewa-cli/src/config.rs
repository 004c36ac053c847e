// crates/sewa-cli/src/config.rs
//
// Runtime configuration for the sewa CLI.
// Loaded from a TOML file or populated with sensible defaults.

use serde::Deserialize;
use std::fs;

use sewa_catalog::SponsoredFeed;
use sewa_core::ads::AdBanner;

/// Runtime configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SewaConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Load the demo accounts and listings on start-up.
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,

    /// Model name passed to the description endpoint.
    #[serde(default = "default_describe_model")]
    pub describe_model: String,

    /// API key for description generation. Falls back to the `API_KEY`
    /// and `GEMINI_API_KEY` environment variables.
    #[serde(default)]
    pub describe_api_key: Option<String>,

    /// Request timeout for description generation, in seconds.
    #[serde(default = "default_describe_timeout_secs")]
    pub describe_timeout_secs: u64,

    /// Sponsored banners (`[[ads]]` tables).
    #[serde(default = "default_ads")]
    pub ads: Vec<AdBanner>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_seed_demo_data() -> bool {
    true
}

fn default_describe_model() -> String {
    sewa_describe::DEFAULT_MODEL.to_string()
}

fn default_describe_timeout_secs() -> u64 {
    15
}

fn default_ads() -> Vec<AdBanner> {
    SponsoredFeed::launch_sponsors().banners().to_vec()
}

impl Default for SewaConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            seed_demo_data: default_seed_demo_data(),
            describe_model: default_describe_model(),
            describe_api_key: None,
            describe_timeout_secs: default_describe_timeout_secs(),
            ads: default_ads(),
        }
    }
}

impl SewaConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: SewaConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// The configured key, else the first non-blank environment key.
    pub fn api_key(&self) -> Option<String> {
        self.api_key_with(|name| std::env::var(name).ok())
    }

    /// Key resolution against an arbitrary environment lookup. Blank
    /// candidates are skipped, not returned.
    fn api_key_with<F>(&self, env: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |k: &String| !k.trim().is_empty();
        self.describe_api_key
            .clone()
            .filter(present)
            .or_else(|| env("API_KEY").filter(present))
            .or_else(|| env("GEMINI_API_KEY").filter(present))
    }

    pub fn feed(&self) -> SponsoredFeed {
        SponsoredFeed::new(self.ads.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sewa_core::ads::AdPosition;

    #[test]
    fn empty_file_yields_defaults() {
        let config: SewaConfig = toml::from_str("").unwrap();
        assert_eq!(config.log_level, "warn");
        assert!(config.seed_demo_data);
        assert_eq!(config.describe_model, "gemini-2.5-flash");
        assert_eq!(config.describe_timeout_secs, 15);
        assert_eq!(config.feed(), SponsoredFeed::launch_sponsors());
    }

    #[test]
    fn ads_tables_replace_launch_sponsors() {
        let config: SewaConfig = toml::from_str(
            r#"
            seed_demo_data = false
            describe_api_key = "k"

            [[ads]]
            id = "ad9"
            position = "sidebar"
            title = "Dobi Layan Diri Tasek"
            image_url = "https://picsum.photos/id/9/300/600"
            "#,
        )
        .unwrap();
        assert!(!config.seed_demo_data);
        assert_eq!(config.api_key().as_deref(), Some("k"));
        assert_eq!(config.ads.len(), 1);
        assert_eq!(config.ads[0].position, AdPosition::Sidebar);
        assert_eq!(config.ads[0].link_url, "#");
    }

    #[test]
    fn blank_keys_fall_through_to_the_next_source() {
        let env = |name: &str| match name {
            "API_KEY" => Some("  ".to_string()),
            "GEMINI_API_KEY" => Some("env-key".to_string()),
            _ => None,
        };
        let config: SewaConfig = toml::from_str(r#"describe_api_key = "   ""#).unwrap();
        assert_eq!(config.api_key_with(env).as_deref(), Some("env-key"));

        let config = SewaConfig::default();
        assert_eq!(config.api_key_with(env).as_deref(), Some("env-key"));
        assert_eq!(config.api_key_with(|_| None), None);
        assert_eq!(config.api_key_with(|_| Some(String::new())), None);

        let config: SewaConfig = toml::from_str(r#"describe_api_key = "file-key""#).unwrap();
        assert_eq!(config.api_key_with(env).as_deref(), Some("file-key"));
    }

    #[test]
    fn unknown_ad_position_is_rejected() {
        let parsed: Result<SewaConfig, _> = toml::from_str(
            r#"
            [[ads]]
            id = "x"
            position = "footer"
            title = "t"
            image_url = "u"
            "#,
        );
        assert!(parsed.is_err());
    }
}
