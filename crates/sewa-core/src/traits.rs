// crates/sewa-core/src/traits.rs

use async_trait::async_trait;

/// Best-effort generator of listing descriptions.
///
/// Implemented by sewa-describe. Implementations never fail: on error or
/// missing configuration they return placeholder text for the owner to
/// replace by hand.
#[async_trait]
pub trait DescriptionGenerator: Send + Sync {
    /// Draft a description for a listing with the given title, category
    /// label and location label.
    async fn describe(&self, title: &str, category: &str, location: &str) -> String;
}
