// crates/sewa-workflow/src/context.rs
//
// Application context. Built once at start-up; every consumer borrows the
// same two stores from here instead of reaching for global state.

use std::sync::Arc;

use sewa_catalog::{CatalogView, SponsoredFeed};
use sewa_core::clock::{Clock, SystemClock};
use sewa_store::{ItemStore, UserStore};

use crate::moderation::ModerationWorkflow;
use crate::owner::OwnerWorkflow;

/// Owns the user and listing stores for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Marketplace {
    users: Arc<UserStore>,
    items: Arc<ItemStore>,
}

impl Marketplace {
    /// Empty marketplace on wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Empty marketplace whose stores share one time source.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            users: Arc::new(UserStore::with_clock(clock.clone())),
            items: Arc::new(ItemStore::with_clock(clock)),
        }
    }

    pub fn users(&self) -> &Arc<UserStore> {
        &self.users
    }

    pub fn items(&self) -> &Arc<ItemStore> {
        &self.items
    }

    /// Public catalog over this marketplace with the given sponsors.
    pub fn catalog(&self, feed: SponsoredFeed) -> CatalogView {
        CatalogView::new(self.items.clone(), self.users.clone(), feed)
    }

    /// Admin actions.
    pub fn moderation(&self) -> ModerationWorkflow {
        ModerationWorkflow::new(self.items.clone(), self.users.clone())
    }

    /// Owner self-service.
    pub fn owner(&self) -> OwnerWorkflow {
        OwnerWorkflow::new(self.items.clone(), self.users.clone())
    }
}

impl Default for Marketplace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workflows_share_the_same_stores() {
        let market = Marketplace::new();
        let user = market.users().register("Ali", "ali@gmail.com", "601").unwrap();
        market.moderation().verify_user(&user.id).unwrap();
        let seen = market.users().get(&user.id).unwrap().unwrap();
        assert!(seen.is_verified);
        assert_eq!(seen.trust_score, 70);
    }
}
