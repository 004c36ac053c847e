// crates/sewa-workflow/tests/marketplace_flows.rs
//
// End-to-end flows through the Marketplace context: registration and trust
// progression, submission and moderation, catalog ordering with sponsored
// content, and owner/admin deletes.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use uuid::Uuid;

use sewa_catalog::{CatalogEntry, CatalogQuery, OwnerCard, SponsoredFeed};
use sewa_core::item::{Category, ItemStatus, NewItem};
use sewa_core::trust::TrustScoreCalculator;
use sewa_core::user::UserPatch;
use sewa_core::{DescriptionGenerator, FixedClock, SewaError};
use sewa_workflow::{ListingDraft, Marketplace};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn frozen_market() -> Marketplace {
    let at = Utc.with_ymd_and_hms(2024, 5, 15, 10, 30, 0).unwrap();
    Marketplace::with_clock(Arc::new(FixedClock(at)))
}

fn draft(title: &str) -> ListingDraft {
    ListingDraft {
        title: title.to_string(),
        description: "Dalam keadaan baik.".to_string(),
        category: "Tools & Hardware".to_string(),
        location: "Precint 9".to_string(),
        price_per_day: 15,
        ..ListingDraft::default()
    }
}

/// Generator that behaves like an unconfigured collaborator.
struct UnconfiguredGenerator;

#[async_trait]
impl DescriptionGenerator for UnconfiguredGenerator {
    async fn describe(&self, _title: &str, _category: &str, _location: &str) -> String {
        "API Key not configured. Please fill description manually.".to_string()
    }
}

// ---------------------------------------------------------------------------
// Trust score
// ---------------------------------------------------------------------------

#[test]
fn trust_score_progression() {
    let market = frozen_market();
    let owner = market.owner();
    let admin = market.moderation();

    let u = market
        .users()
        .register("Ali Hardware", "ali@gmail.com", "60123456789")
        .unwrap();
    assert_eq!(u.trust_score, 50);

    let u = owner
        .update_profile(&u.id, UserPatch::default().with_bio("Alatan tukang!!"))
        .unwrap();
    assert_eq!(u.bio.as_deref().map(|b| b.chars().count()), Some(15));
    assert_eq!(u.trust_score, 60);

    let u = owner.submit_selfie(&u.id, "selfie-ali.jpg").unwrap();
    assert_eq!(u.trust_score, 80);

    let u = admin.verify_user(&u.id).unwrap();
    assert_eq!(u.trust_score, 100);
}

#[test]
fn stored_score_always_matches_calculator() {
    let market = frozen_market();
    let users = market.users();
    let admin = market.moderation();
    let mut last = 0u8;
    let mut check = |user: sewa_core::User| {
        let stored = users.get(&user.id).unwrap().unwrap();
        assert_eq!(stored.trust_score, TrustScoreCalculator::compute(&stored));
        assert_eq!(stored.trust_score, user.trust_score);
        assert!((40..=100).contains(&stored.trust_score));
        // None of these steps removes a scoring input.
        assert!(stored.trust_score >= last);
        last = stored.trust_score;
    };

    let u = users.register("Siti", "siti@gmail.com", "60133344455").unwrap();
    check(users.update(&u.id, UserPatch::default().with_name("Siti Party")).unwrap());
    check(users.set_selfie_verified(&u.id, "a.png").unwrap());
    check(admin.verify_user(&u.id).unwrap());
    check(users.set_selfie_verified(&u.id, "b.png").unwrap());
    check(users.update(&u.id, UserPatch::default().with_bio("Sewa barang party")).unwrap());
    drop(check);
    assert_eq!(last, 100);
}

// ---------------------------------------------------------------------------
// Listing lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submission_is_pending_until_approved() {
    let market = frozen_market();
    let feed = SponsoredFeed::launch_sponsors();
    let ali = market.users().register("Ali", "ali@gmail.com", "601").unwrap();

    let item = market
        .owner()
        .submit_listing(&ali.id, draft("Tangga Lipat 12 Kaki"), None)
        .await
        .unwrap();
    assert_eq!(item.status, ItemStatus::Pending);
    assert!(!item.is_featured);
    assert!(item.is_available);
    assert_eq!(market.catalog(feed.clone()).browse(&CatalogQuery::new()).unwrap().listing_count, 0);

    market.moderation().approve(&item.id).unwrap();
    let page = market.catalog(feed.clone()).browse(&CatalogQuery::new()).unwrap();
    assert_eq!(page.listing_count, 1);

    market.moderation().reject(&item.id).unwrap();
    let page = market.catalog(feed).browse(&CatalogQuery::new()).unwrap();
    assert_eq!(page.listing_count, 0);
}

#[tokio::test]
async fn unconfigured_generator_still_creates_listing() {
    let market = frozen_market();
    let ali = market.users().register("Ali", "ali@gmail.com", "601").unwrap();
    let mut d = draft("Heavy Duty Drill Bosch");
    d.description.clear();

    let item = market
        .owner()
        .submit_listing(&ali.id, d, Some(&UnconfiguredGenerator))
        .await
        .unwrap();
    assert_eq!(
        item.description,
        "API Key not configured. Please fill description manually."
    );
    assert_eq!(market.items().len().unwrap(), 1);
}

#[test]
fn unknown_category_is_rejected_without_side_effects() {
    let market = frozen_market();
    let before = market.items().len().unwrap();
    let err = market
        .items()
        .create(NewItem {
            owner_id: Uuid::now_v7(),
            title: "Perahu".to_string(),
            description: String::new(),
            category: "Not-A-Real-Category".to_string(),
            location: "Tasek".to_string(),
            price_per_day: 50,
            contact_phone: "601".to_string(),
            image_url: String::new(),
        })
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(market.items().len().unwrap(), before);
}

#[test]
fn toggle_featured_on_unknown_id_is_not_found() {
    let market = frozen_market();
    let err = market.moderation().toggle_featured(&Uuid::now_v7()).unwrap_err();
    assert!(matches!(err, SewaError::NotFound(_)));
}

#[tokio::test]
async fn availability_toggle_is_an_involution() {
    let market = frozen_market();
    let ali = market.users().register("Ali", "ali@gmail.com", "601").unwrap();
    let item = market.owner().submit_listing(&ali.id, draft("Drill"), None).await.unwrap();
    let owner = market.owner();
    owner.toggle_availability(&ali.id, &item.id).unwrap();
    let back = owner.toggle_availability(&ali.id, &item.id).unwrap();
    assert_eq!(back.is_available, item.is_available);
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn five_listings_with_insert_banner() {
    let market = frozen_market();
    let ali = market.users().register("Ali", "ali@gmail.com", "601").unwrap();
    for title in ["A", "B", "C", "D", "E"] {
        let item = market.owner().submit_listing(&ali.id, draft(title), None).await.unwrap();
        market.moderation().approve(&item.id).unwrap();
    }

    let page = market
        .catalog(SponsoredFeed::launch_sponsors())
        .browse(&CatalogQuery::new())
        .unwrap();
    let shape: Vec<String> = page
        .entries
        .iter()
        .map(|e| match e {
            CatalogEntry::Listing(i) => i.title.clone(),
            CatalogEntry::Sponsored(_) => "<banner>".to_string(),
        })
        .collect();
    assert_eq!(shape, vec!["A", "B", "C", "D", "<banner>", "E"]);
}

#[tokio::test]
async fn featured_listing_jumps_the_queue_and_filters_apply() {
    let market = frozen_market();
    let ali = market.users().register("Ali", "ali@gmail.com", "601").unwrap();
    let mut ids = Vec::new();
    for (title, category) in [
        ("Drill", "Tools & Hardware"),
        ("Khemah", "Camping & Outdoor"),
        ("Tangga", "Tools & Hardware"),
    ] {
        let mut d = draft(title);
        d.category = category.to_string();
        let item = market.owner().submit_listing(&ali.id, d, None).await.unwrap();
        market.moderation().approve(&item.id).unwrap();
        ids.push(item.id);
    }
    market.moderation().toggle_featured(&ids[2]).unwrap();

    let catalog = market.catalog(SponsoredFeed::empty());
    let all: Vec<Uuid> = catalog
        .browse(&CatalogQuery::new())
        .unwrap()
        .listings()
        .map(|i| i.id)
        .collect();
    assert_eq!(all, vec![ids[2], ids[0], ids[1]]);

    let tools = catalog
        .browse(&CatalogQuery::new().category(Category::ToolsHardware).search("dri"))
        .unwrap();
    assert_eq!(tools.listings().map(|i| i.id).collect::<Vec<_>>(), vec![ids[0]]);
}

#[tokio::test]
async fn deleted_listing_disappears_and_detail_handles_unknown_owner() {
    let market = frozen_market();
    let ali = market.users().register("Ali", "ali@gmail.com", "601").unwrap();
    let item = market.owner().submit_listing(&ali.id, draft("Drill"), None).await.unwrap();
    market.moderation().approve(&item.id).unwrap();

    let catalog = market.catalog(SponsoredFeed::empty());
    match catalog.listing_detail(&item.id).unwrap().unwrap().owner {
        OwnerCard::Found(owner) => assert_eq!(owner.name, "Ali"),
        OwnerCard::Missing { .. } => panic!("owner should resolve"),
    }

    market.moderation().delete_listing(&item.id).unwrap();
    assert!(catalog.listing_detail(&item.id).unwrap().is_none());
    assert_eq!(catalog.browse(&CatalogQuery::new()).unwrap().listing_count, 0);

    // A listing whose owner id never existed still renders.
    let orphan = market
        .items()
        .create(NewItem {
            owner_id: Uuid::now_v7(),
            title: "Kerusi Lipat".to_string(),
            description: String::new(),
            category: "Perabot".to_string(),
            location: "Lot kedai 2 (TMB)".to_string(),
            price_per_day: 0,
            contact_phone: "60199999999".to_string(),
            image_url: String::new(),
        })
        .unwrap();
    let detail = catalog.listing_detail(&orphan.id).unwrap().unwrap();
    assert!(matches!(detail.owner, OwnerCard::Missing { .. }));
}

#[test]
fn catalog_is_safe_to_share_across_threads() {
    let market = frozen_market();
    let owner_id = Uuid::now_v7();
    for n in 0..12 {
        let item = market
            .items()
            .create(NewItem {
                owner_id,
                title: format!("Item {}", n),
                description: String::new(),
                category: "Lain-lain".to_string(),
                location: "Tasek".to_string(),
                price_per_day: n,
                contact_phone: "601".to_string(),
                image_url: String::new(),
            })
            .unwrap();
        market.moderation().approve(&item.id).unwrap();
    }
    let catalog = market.catalog(SponsoredFeed::launch_sponsors());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let catalog = catalog.clone();
            std::thread::spawn(move || catalog.browse(&CatalogQuery::new()).unwrap())
        })
        .collect();
    let pages: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for page in &pages {
        assert_eq!(page, &pages[0]);
        assert_eq!(page.entries.len(), 13);
        assert!(page.entries[4].is_sponsored());
    }
}
