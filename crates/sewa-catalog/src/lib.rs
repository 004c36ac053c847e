// crates/sewa-catalog/src/lib.rs
//
// sewa-catalog: Read-only projection of the listing and user stores for
// public display.
//
// The catalog is recomputed on every call: active listings only, optional
// title/category/location filters, featured-then-newest ordering, and a
// sponsored banner spliced into the sequence. Nothing here writes to a store.

pub mod feed;
pub mod view;

pub use feed::SponsoredFeed;
pub use view::{
    CatalogEntry, CatalogPage, CatalogQuery, CatalogView, ListingDetail, OwnerCard, OwnerProfile,
    OwnerSummary,
};
