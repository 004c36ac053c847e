// crates/sewa-store/src/items.rs
//
// In-memory listing store. Owns every Item record; owners are referenced by
// id only, so removing or never having a user does not touch listings.
//
// Items are kept in insertion order, which is the tie-break the catalog
// relies on when two listings share a creation timestamp.

use std::sync::{Arc, RwLock};

use uuid::Uuid;

use sewa_core::clock::{Clock, SystemClock};
use sewa_core::error::SewaError;
use sewa_core::item::{Item, ItemStatus, NewItem};

use crate::poisoned;

/// Listings in insertion order.
#[derive(Debug)]
pub struct ItemStore {
    items: RwLock<Vec<Item>>,
    clock: Arc<dyn Clock>,
}

impl ItemStore {
    /// Create an empty store using wall-clock time for `created_at`.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty store with an explicit time source.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            clock,
        }
    }

    /// Create a listing from owner input.
    ///
    /// The listing always starts pending, not featured and available. On a
    /// validation failure nothing is stored.
    pub fn create(&self, draft: NewItem) -> Result<Item, SewaError> {
        let (category, location, price_per_day) = draft.validated()?;

        let item = Item {
            id: Uuid::now_v7(),
            owner_id: draft.owner_id,
            title: draft.title.trim().to_string(),
            description: draft.description,
            category,
            location,
            price_per_day,
            contact_phone: draft.contact_phone.trim().to_string(),
            image_url: draft.image_url,
            status: ItemStatus::Pending,
            is_featured: false,
            is_available: true,
            created_at: self.clock.now(),
        };

        let mut items = self.items.write().map_err(poisoned)?;
        items.push(item.clone());
        tracing::info!(
            item_id = %item.id,
            owner_id = %item.owner_id,
            category = %item.category,
            "Listing submitted for review"
        );
        Ok(item)
    }

    /// Move a listing to any moderation status.
    pub fn set_status(&self, id: &Uuid, status: ItemStatus) -> Result<Item, SewaError> {
        self.mutate(id, |item| {
            if item.status != status {
                tracing::info!(item_id = %item.id, from = %item.status, to = %status, "Status changed");
            }
            item.status = status;
        })
    }

    /// Flip the admin promotion flag.
    pub fn toggle_featured(&self, id: &Uuid) -> Result<Item, SewaError> {
        self.mutate(id, |item| item.is_featured = !item.is_featured)
    }

    /// Flip the owner availability flag.
    pub fn toggle_availability(&self, id: &Uuid) -> Result<Item, SewaError> {
        self.mutate(id, |item| item.is_available = !item.is_available)
    }

    /// Hard-delete a listing. Deleting an absent id is `NotFound`.
    pub fn delete(&self, id: &Uuid) -> Result<(), SewaError> {
        let mut items = self.items.write().map_err(poisoned)?;
        let pos = items
            .iter()
            .position(|i| i.id == *id)
            .ok_or_else(|| SewaError::not_found(format!("item {}", id)))?;
        let removed = items.remove(pos);
        tracing::info!(item_id = %removed.id, "Listing deleted");
        Ok(())
    }

    /// Look up a listing by id.
    pub fn get(&self, id: &Uuid) -> Result<Option<Item>, SewaError> {
        let items = self.items.read().map_err(poisoned)?;
        Ok(items.iter().find(|i| i.id == *id).cloned())
    }

    /// All listings in insertion order, regardless of status.
    pub fn list_all(&self) -> Result<Vec<Item>, SewaError> {
        let items = self.items.read().map_err(poisoned)?;
        Ok(items.clone())
    }

    /// Listings belonging to one owner, in insertion order.
    pub fn list_by_owner(&self, owner_id: &Uuid) -> Result<Vec<Item>, SewaError> {
        let items = self.items.read().map_err(poisoned)?;
        Ok(items.iter().filter(|i| i.owner_id == *owner_id).cloned().collect())
    }

    /// Number of listings.
    pub fn len(&self) -> Result<usize, SewaError> {
        Ok(self.items.read().map_err(poisoned)?.len())
    }

    /// Whether the store holds no listings.
    pub fn is_empty(&self) -> Result<bool, SewaError> {
        Ok(self.len()? == 0)
    }

    fn mutate<F>(&self, id: &Uuid, f: F) -> Result<Item, SewaError>
    where
        F: FnOnce(&mut Item),
    {
        let mut items = self.items.write().map_err(poisoned)?;
        let item = items
            .iter_mut()
            .find(|i| i.id == *id)
            .ok_or_else(|| SewaError::not_found(format!("item {}", id)))?;
        f(item);
        Ok(item.clone())
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
