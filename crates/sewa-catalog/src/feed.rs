// crates/sewa-catalog/src/feed.rs
//
// Static sponsored-content feed keyed by display position.

use serde::{Deserialize, Serialize};

use sewa_core::ads::{AdBanner, AdPosition};

/// Immutable list of banners.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SponsoredFeed {
    banners: Vec<AdBanner>,
}

impl SponsoredFeed {
    pub fn new(banners: Vec<AdBanner>) -> Self {
        Self { banners }
    }

    /// A feed with no banners at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The launch sponsors: one top banner and one in-list banner.
    pub fn launch_sponsors() -> Self {
        Self::new(vec![
            AdBanner {
                id: "ad1".to_string(),
                position: AdPosition::Top,
                title: "Kedai Hardware Ah Chong - Diskaun 10%".to_string(),
                image_url: "https://picsum.photos/id/20/800/200".to_string(),
                link_url: "#".to_string(),
            },
            AdBanner {
                id: "ad2".to_string(),
                position: AdPosition::ListInsert,
                title: "Perkhidmatan Lori Sewa Kuantan".to_string(),
                image_url: "https://picsum.photos/id/21/400/300".to_string(),
                link_url: "#".to_string(),
            },
        ])
    }

    /// First banner at the given position, if any.
    pub fn first_at(&self, position: AdPosition) -> Option<&AdBanner> {
        self.banners.iter().find(|b| b.position == position)
    }

    /// Every banner at the given position, in feed order.
    pub fn all_at(&self, position: AdPosition) -> Vec<&AdBanner> {
        self.banners.iter().filter(|b| b.position == position).collect()
    }

    pub fn banners(&self) -> &[AdBanner] {
        &self.banners
    }

    pub fn len(&self) -> usize {
        self.banners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }
}
