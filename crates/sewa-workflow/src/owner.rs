// crates/sewa-workflow/src/owner.rs
//
// Owner self-service: submit listings (optionally with a generated
// description), manage availability, remove own listings, edit profile,
// submit a selfie.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sewa_core::error::SewaError;
use sewa_core::item::{Item, NewItem};
use sewa_core::traits::DescriptionGenerator;
use sewa_core::trust::TrustBreakdown;
use sewa_core::user::{User, UserPatch};
use sewa_store::{ItemStore, UserStore};

/// Listing form as filled in by an owner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingDraft {
    pub title: String,
    /// Left blank to ask the description generator.
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub location: String,
    #[serde(default)]
    pub price_per_day: i64,
    /// Left blank to use the owner's current phone.
    #[serde(default)]
    pub contact_phone: String,
    /// Left blank for a placeholder photo.
    #[serde(default)]
    pub image_url: String,
}

/// Boundary for owner actions.
#[derive(Debug, Clone)]
pub struct OwnerWorkflow {
    items: Arc<ItemStore>,
    users: Arc<UserStore>,
}

impl OwnerWorkflow {
    pub fn new(items: Arc<ItemStore>, users: Arc<UserStore>) -> Self {
        Self { items, users }
    }

    /// Submit a listing for review.
    ///
    /// The draft is validated before the generator is consulted, and the
    /// generator is awaited before the store is touched, so a slow or failing
    /// generator can only ever affect the description text.
    pub async fn submit_listing(
        &self,
        owner_id: &Uuid,
        draft: ListingDraft,
        generator: Option<&dyn DescriptionGenerator>,
    ) -> Result<Item, SewaError> {
        let owner = self.owner(owner_id)?;

        let contact_phone = if draft.contact_phone.trim().is_empty() {
            owner.phone.clone()
        } else {
            draft.contact_phone
        };
        let image_url = if draft.image_url.trim().is_empty() {
            placeholder_image()
        } else {
            draft.image_url
        };
        let mut new_item = NewItem {
            owner_id: owner.id,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            location: draft.location,
            price_per_day: draft.price_per_day,
            contact_phone,
            image_url,
        };
        new_item.validated()?;

        if new_item.description.trim().is_empty() {
            if let Some(generator) = generator {
                tracing::debug!(owner_id = %owner.id, title = %new_item.title, "Generating description");
                new_item.description = generator
                    .describe(&new_item.title, &new_item.category, &new_item.location)
                    .await;
            }
        }

        self.items.create(new_item)
    }

    /// The owner's listings in every status.
    pub fn my_listings(&self, owner_id: &Uuid) -> Result<Vec<Item>, SewaError> {
        self.items.list_by_owner(owner_id)
    }

    /// Mark an own listing as rented out or available again.
    pub fn toggle_availability(&self, owner_id: &Uuid, item_id: &Uuid) -> Result<Item, SewaError> {
        self.ensure_owned(owner_id, item_id)?;
        let item = self.items.toggle_availability(item_id)?;
        tracing::info!(item_id = %item_id, available = item.is_available, "Availability toggled");
        Ok(item)
    }

    /// Delete an own listing.
    pub fn remove_listing(&self, owner_id: &Uuid, item_id: &Uuid) -> Result<(), SewaError> {
        self.ensure_owned(owner_id, item_id)?;
        self.items.delete(item_id)
    }

    pub fn update_profile(&self, owner_id: &Uuid, patch: UserPatch) -> Result<User, SewaError> {
        self.users.update(owner_id, patch)
    }

    /// Record a captured selfie. `image_ref` is whatever handle the capture
    /// device produced.
    pub fn submit_selfie(&self, owner_id: &Uuid, image_ref: &str) -> Result<User, SewaError> {
        self.users.set_selfie_verified(owner_id, image_ref)
    }

    /// Which trust components the owner has earned.
    pub fn trust_breakdown(&self, owner_id: &Uuid) -> Result<TrustBreakdown, SewaError> {
        Ok(TrustBreakdown::of(&self.owner(owner_id)?))
    }

    fn owner(&self, owner_id: &Uuid) -> Result<User, SewaError> {
        self.users
            .get(owner_id)?
            .ok_or_else(|| SewaError::not_found(format!("user {}", owner_id)))
    }

    fn ensure_owned(&self, owner_id: &Uuid, item_id: &Uuid) -> Result<(), SewaError> {
        let item = self
            .items
            .get(item_id)?
            .ok_or_else(|| SewaError::not_found(format!("item {}", item_id)))?;
        if item.owner_id != *owner_id {
            tracing::warn!(item_id = %item_id, owner_id = %owner_id, "Owner acted on another owner's listing");
            return Err(SewaError::Forbidden(format!(
                "item {} does not belong to user {}",
                item_id, owner_id
            )));
        }
        Ok(())
    }
}

fn placeholder_image() -> String {
    format!(
        "https://picsum.photos/400/300?random={}",
        Utc::now().timestamp_millis()
    )
}
