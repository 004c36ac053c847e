// crates/sewa-workflow/src/lib.rs
//
// sewa-workflow: The boundaries admins and owners act through.
//
// `ModerationWorkflow` glues admin actions to the stores, `OwnerWorkflow`
// covers owner self-service, and `Marketplace` is the application context
// that owns the stores and hands out both workflows and the catalog view.
// Neither workflow holds state of its own.

pub mod context;
pub mod moderation;
pub mod owner;

pub use context::Marketplace;
pub use moderation::{ModerationRow, ModerationWorkflow};
pub use owner::{ListingDraft, OwnerWorkflow};
