// crates/sewa-catalog/src/view.rs
//
// CatalogView: public projection over ItemStore + UserStore.
//
// Pipeline for the browse page:
//   1. active listings only
//   2. optional filters (title substring, category, location), ANDed
//   3. stable sort: featured first, then newest first
//   4. list_insert banner spliced before the fifth listing
//   5. top banner returned separately

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sewa_core::ads::{AdBanner, AdPosition};
use sewa_core::contact;
use sewa_core::error::SewaError;
use sewa_core::item::{Category, Item, Location};
use sewa_core::trust::TrustLevel;
use sewa_core::user::User;
use sewa_store::{ItemStore, UserStore};

use crate::feed::SponsoredFeed;

/// Zero-based listing index that the in-list banner is rendered before.
pub const SPONSORED_SLOT: usize = 4;

/// Optional, conjunctive catalog filters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Case-insensitive substring of the title, matched as given. Only the
    /// empty string means no filter.
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub location: Option<Location>,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Build a query from raw form values, validating category and location.
    pub fn parse(
        search: Option<&str>,
        category: Option<&str>,
        location: Option<&str>,
    ) -> Result<Self, SewaError> {
        Ok(Self {
            search: search.map(str::to_string),
            category: category.map(str::parse::<Category>).transpose()?,
            location: location.map(str::parse::<Location>).transpose()?,
        })
    }

    /// Whether a listing passes every filter that is set.
    pub fn matches(&self, item: &Item) -> bool {
        let title_ok = match self.search.as_deref() {
            Some(needle) if !needle.is_empty() => item
                .title
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            _ => true,
        };
        title_ok
            && self.category.map_or(true, |c| item.category == c)
            && self.location.map_or(true, |l| item.location == l)
    }
}

/// One slot in the rendered listing sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogEntry {
    Listing(Item),
    Sponsored(AdBanner),
}

impl CatalogEntry {
    pub fn as_listing(&self) -> Option<&Item> {
        match self {
            CatalogEntry::Listing(item) => Some(item),
            CatalogEntry::Sponsored(_) => None,
        }
    }

    pub fn is_sponsored(&self) -> bool {
        matches!(self, CatalogEntry::Sponsored(_))
    }
}

/// Result of a browse call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogPage {
    /// Shown once above the grid, independent of the listings.
    pub top_banner: Option<AdBanner>,
    /// Listings with any sponsored insert spliced in.
    pub entries: Vec<CatalogEntry>,
    /// Number of listings in `entries`, banners excluded.
    pub listing_count: usize,
}

impl CatalogPage {
    /// Listings only, in display order.
    pub fn listings(&self) -> impl Iterator<Item = &Item> {
        self.entries.iter().filter_map(CatalogEntry::as_listing)
    }
}

/// Public facts about a listing's owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OwnerSummary {
    pub id: Uuid,
    pub name: String,
    pub avatar_url: Option<String>,
    pub join_date: DateTime<Utc>,
    pub trust_score: u8,
    pub trust_level: TrustLevel,
    pub is_verified: bool,
    pub has_selfie_verified: bool,
}

impl From<&User> for OwnerSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            avatar_url: user.avatar_url.clone(),
            join_date: user.join_date,
            trust_score: user.trust_score,
            trust_level: TrustLevel::of(user.trust_score),
            is_verified: user.is_verified,
            has_selfie_verified: user.has_selfie_verified,
        }
    }
}

/// Owner resolution for a listing. A dangling owner id is a normal outcome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum OwnerCard {
    Found(OwnerSummary),
    Missing { owner_id: Uuid },
}

/// Everything the listing detail page needs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListingDetail {
    pub item: Item,
    pub owner: OwnerCard,
    /// Click-to-chat link built from the listing's contact phone.
    pub contact_link: String,
}

/// A user's public profile with their active listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OwnerProfile {
    pub owner: OwnerSummary,
    pub bio: Option<String>,
    pub listings: Vec<Item>,
}

/// Read-only catalog over the stores.
#[derive(Debug, Clone)]
pub struct CatalogView {
    items: Arc<ItemStore>,
    users: Arc<UserStore>,
    feed: SponsoredFeed,
}

impl CatalogView {
    pub fn new(items: Arc<ItemStore>, users: Arc<UserStore>, feed: SponsoredFeed) -> Self {
        Self { items, users, feed }
    }

    /// Compute the public browse page.
    pub fn browse(&self, query: &CatalogQuery) -> Result<CatalogPage, SewaError> {
        let mut listings: Vec<Item> = self
            .items
            .list_all()?
            .into_iter()
            .filter(|item| item.is_public() && query.matches(item))
            .collect();
        sort_for_display(&mut listings);

        let listing_count = listings.len();
        let entries = interleave(listings, self.feed.first_at(AdPosition::ListInsert));
        tracing::debug!(
            listing_count,
            sponsored = entries.len() - listing_count,
            "Catalog computed"
        );

        Ok(CatalogPage {
            top_banner: self.feed.first_at(AdPosition::Top).cloned(),
            entries,
            listing_count,
        })
    }

    /// Listing detail with owner resolution and contact link.
    ///
    /// Returns the listing whatever its status so owners can preview a
    /// pending submission; `None` only when the id is unknown.
    pub fn listing_detail(&self, item_id: &Uuid) -> Result<Option<ListingDetail>, SewaError> {
        let item = match self.items.get(item_id)? {
            Some(item) => item,
            None => return Ok(None),
        };
        let owner = match self.users.get(&item.owner_id)? {
            Some(user) => OwnerCard::Found(OwnerSummary::from(&user)),
            None => {
                tracing::debug!(item_id = %item.id, owner_id = %item.owner_id, "Listing owner not found");
                OwnerCard::Missing {
                    owner_id: item.owner_id,
                }
            }
        };
        let contact_link = contact::whatsapp_link(&item);
        Ok(Some(ListingDetail {
            item,
            owner,
            contact_link,
        }))
    }

    /// Public profile of a user with their active listings, newest first.
    pub fn owner_profile(&self, user_id: &Uuid) -> Result<Option<OwnerProfile>, SewaError> {
        let user = match self.users.get(user_id)? {
            Some(user) => user,
            None => return Ok(None),
        };
        let mut listings: Vec<Item> = self
            .items
            .list_by_owner(user_id)?
            .into_iter()
            .filter(Item::is_public)
            .collect();
        sort_for_display(&mut listings);
        Ok(Some(OwnerProfile {
            owner: OwnerSummary::from(&user),
            bio: user.bio,
            listings,
        }))
    }

    /// Banners shown beside the grid.
    pub fn sidebar_banners(&self) -> Vec<AdBanner> {
        self.feed
            .all_at(AdPosition::Sidebar)
            .into_iter()
            .cloned()
            .collect()
    }
}

/// Featured first, then newest first. `sort_by` is stable, so listings with
/// equal keys keep store insertion order.
fn sort_for_display(listings: &mut [Item]) {
    listings.sort_by(|a, b| {
        b.is_featured
            .cmp(&a.is_featured)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

/// Splice the in-list banner before the listing at [`SPONSORED_SLOT`].
fn interleave(listings: Vec<Item>, insert: Option<&AdBanner>) -> Vec<CatalogEntry> {
    let splice = insert.filter(|_| listings.len() > SPONSORED_SLOT);
    let mut entries = Vec::with_capacity(listings.len() + usize::from(splice.is_some()));
    for (index, item) in listings.into_iter().enumerate() {
        if index == SPONSORED_SLOT {
            if let Some(banner) = splice {
                entries.push(CatalogEntry::Sponsored(banner.clone()));
            }
        }
        entries.push(CatalogEntry::Listing(item));
    }
    entries
}
