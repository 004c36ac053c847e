// crates/sewa-core/src/ads.rs
//
// Sponsored banners. Supplied once at start-up and never mutated.

use serde::{Deserialize, Serialize};

/// Where a banner is rendered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AdPosition {
    /// Once, above the listing grid.
    Top,
    /// Beside the grid.
    Sidebar,
    /// Spliced into the listing sequence.
    ListInsert,
}

/// A static sponsored banner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdBanner {
    pub id: String,
    pub position: AdPosition,
    pub title: String,
    pub image_url: String,
    #[serde(default = "default_link_url")]
    pub link_url: String,
}

fn default_link_url() -> String {
    "#".to_string()
}
