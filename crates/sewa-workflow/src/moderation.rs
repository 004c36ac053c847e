// crates/sewa-workflow/src/moderation.rs
//
// Admin actions: approve, reject, any status change, promote/demote,
// delete listing, verify/unverify user. Each call delegates to one store
// operation and logs the outcome.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sewa_core::error::SewaError;
use sewa_core::item::{Item, ItemStatus};
use sewa_core::user::User;
use sewa_store::{ItemStore, UserStore};

/// A listing as shown in the admin table, with the owner's name resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModerationRow {
    pub item: Item,
    /// `None` when the owner id no longer resolves.
    pub owner_name: Option<String>,
}

/// Boundary for admin actions.
#[derive(Debug, Clone)]
pub struct ModerationWorkflow {
    items: Arc<ItemStore>,
    users: Arc<UserStore>,
}

impl ModerationWorkflow {
    pub fn new(items: Arc<ItemStore>, users: Arc<UserStore>) -> Self {
        Self { items, users }
    }

    /// Make a listing publicly visible.
    pub fn approve(&self, item_id: &Uuid) -> Result<Item, SewaError> {
        self.set_status(item_id, ItemStatus::Active)
    }

    /// Hide a listing from the public catalog.
    pub fn reject(&self, item_id: &Uuid) -> Result<Item, SewaError> {
        self.set_status(item_id, ItemStatus::Rejected)
    }

    /// Move a listing to any status, including back to pending for re-review.
    pub fn set_status(&self, item_id: &Uuid, status: ItemStatus) -> Result<Item, SewaError> {
        let item = self.items.set_status(item_id, status)?;
        tracing::info!(item_id = %item_id, status = %status, "Moderation: status set");
        Ok(item)
    }

    /// Promote a listing if it is not featured, demote it if it is.
    pub fn toggle_featured(&self, item_id: &Uuid) -> Result<Item, SewaError> {
        let item = self.items.toggle_featured(item_id)?;
        tracing::info!(item_id = %item_id, featured = item.is_featured, "Moderation: featured toggled");
        Ok(item)
    }

    /// Hard-delete a listing.
    pub fn delete_listing(&self, item_id: &Uuid) -> Result<(), SewaError> {
        self.items.delete(item_id)?;
        tracing::info!(item_id = %item_id, "Moderation: listing deleted");
        Ok(())
    }

    pub fn verify_user(&self, user_id: &Uuid) -> Result<User, SewaError> {
        self.set_verified(user_id, true)
    }

    pub fn unverify_user(&self, user_id: &Uuid) -> Result<User, SewaError> {
        self.set_verified(user_id, false)
    }

    /// Verify an unverified user or revoke a verified one.
    pub fn toggle_verification(&self, user_id: &Uuid) -> Result<User, SewaError> {
        let user = self.users.toggle_admin_verified(user_id)?;
        tracing::info!(
            user_id = %user_id,
            verified = user.is_verified,
            trust_score = user.trust_score,
            "Moderation: verification toggled"
        );
        Ok(user)
    }

    /// Every listing regardless of status, in store order.
    pub fn listings(&self) -> Result<Vec<ModerationRow>, SewaError> {
        let users = self.users.list()?;
        let rows = self
            .items
            .list_all()?
            .into_iter()
            .map(|item| {
                let owner_name = users
                    .iter()
                    .find(|u| u.id == item.owner_id)
                    .map(|u| u.name.clone());
                ModerationRow { item, owner_name }
            })
            .collect();
        Ok(rows)
    }

    /// Listings waiting for a decision.
    pub fn review_queue(&self) -> Result<Vec<Item>, SewaError> {
        Ok(self
            .items
            .list_all()?
            .into_iter()
            .filter(|i| i.status == ItemStatus::Pending)
            .collect())
    }

    /// Every user with their current trust score.
    pub fn users(&self) -> Result<Vec<User>, SewaError> {
        self.users.list()
    }

    fn set_verified(&self, user_id: &Uuid, verified: bool) -> Result<User, SewaError> {
        let user = self.users.set_admin_verified(user_id, verified)?;
        tracing::info!(
            user_id = %user_id,
            verified,
            trust_score = user.trust_score,
            "Moderation: verification set"
        );
        Ok(user)
    }
}
