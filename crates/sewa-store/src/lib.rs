// crates/sewa-store/src/lib.rs
//
// sewa-store: Storage layer for the SewaLokal rental catalog.
//
// Process-local, in-memory stores for users and listings. Each store is
// guarded by a single RwLock so that every read-modify-write (for example
// "apply a profile patch, then recompute the trust score") is observed as one
// step. Nothing survives a restart.

pub mod items;
pub mod users;

// Re-export key types for ergonomic access from downstream crates.
pub use items::ItemStore;
pub use users::UserStore;

use sewa_core::SewaError;

/// Map a poisoned-lock error into the storage error variant.
pub(crate) fn poisoned<E: std::fmt::Display>(e: E) -> SewaError {
    SewaError::Storage(format!("RwLock poisoned: {}", e))
}
