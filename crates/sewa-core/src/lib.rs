// crates/sewa-core/src/lib.rs
//
// sewa-core: Core types, trust scoring, and collaborator traits for the
// SewaLokal rental catalog.
//
// This is the leaf crate that all other crates in the workspace depend on.
// It defines the user and listing records, the error taxonomy, the trust
// score calculator, and the trait seams for external collaborators.

pub mod ads;
pub mod clock;
pub mod contact;
pub mod error;
pub mod item;
pub mod traits;
pub mod trust;
pub mod user;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use sewa_core::Item;`

// Listing types
pub use item::{Category, Item, ItemStatus, Location, NewItem};

// User types
pub use user::{ProvisionedUser, User, UserPatch, UserRole};

// Sponsored content
pub use ads::{AdBanner, AdPosition};

// Trust scoring
pub use trust::{TrustBreakdown, TrustLevel, TrustScoreCalculator};

// Error type
pub use error::SewaError;

// Clock and collaborators
pub use clock::{Clock, FixedClock, SystemClock};
pub use traits::DescriptionGenerator;
