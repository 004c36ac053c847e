// crates/sewa-cli/src/seed.rs
//
// Demo accounts and listings loaded at start-up when `seed_demo_data` is on.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use sewa_core::error::SewaError;
use sewa_core::item::{ItemStatus, NewItem};
use sewa_core::user::{ProvisionedUser, UserRole};
use sewa_workflow::Marketplace;

use crate::labels::Labels;

pub const ADMIN_ID: Uuid = Uuid::from_u128(0x0190_0000_0000_7000_8000_0000_0000_0001);
pub const ALI_ID: Uuid = Uuid::from_u128(0x0190_0000_0000_7000_8000_0000_0000_0002);
pub const SITI_ID: Uuid = Uuid::from_u128(0x0190_0000_0000_7000_8000_0000_0000_0003);

struct SeedItem {
    label: &'static str,
    owner: Uuid,
    title: &'static str,
    description: &'static str,
    category: &'static str,
    location: &'static str,
    price_per_day: i64,
    photo: u32,
    status: ItemStatus,
    featured: bool,
}

/// Listings in display order. Created back to front so the newest-first
/// ordering reproduces this list.
const ITEMS: &[SeedItem] = &[
    SeedItem {
        label: "drill",
        owner: ALI_ID,
        title: "Heavy Duty Drill Bosch",
        description: "Sesuai untuk tebuk dinding konkrit. Datang sekali mata drill set.",
        category: "Tools & Hardware",
        location: "Precint 9",
        price_per_day: 30,
        photo: 1,
        status: ItemStatus::Active,
        featured: true,
    },
    SeedItem {
        label: "ladder",
        owner: ALI_ID,
        title: "Tangga Lipat 12 Kaki",
        description: "Tangga aluminium heavy duty. Boleh lipat masuk kereta sedan.",
        category: "Tools & Hardware",
        location: "Lot kedai 1 (Shell)",
        price_per_day: 15,
        photo: 2,
        status: ItemStatus::Active,
        featured: false,
    },
    SeedItem {
        label: "tent",
        owner: SITI_ID,
        title: "Khemah Camping 4 Orang",
        description: "Waterproof, mudah pasang. Sekali dengan ground sheet.",
        category: "Camping & Outdoor",
        location: "Tasek",
        price_per_day: 25,
        photo: 3,
        status: ItemStatus::Active,
        featured: false,
    },
    SeedItem {
        label: "pa",
        owner: SITI_ID,
        title: "PA System Portable",
        description: "Speaker + 2 Mic Wireless. Bateri tahan 4 jam. Sesuai untuk kenduri kecil.",
        category: "Party & Events",
        location: "Precint 15",
        price_per_day: 80,
        photo: 4,
        status: ItemStatus::Pending,
        featured: false,
    },
];

/// Load the demo data into `market` and bind `@admin`, `@ali`, `@siti`,
/// `@drill`, `@ladder`, `@tent`, `@pa`.
pub fn seed_demo_data(market: &Marketplace, labels: &mut Labels) -> Result<(), SewaError> {
    for (label, record) in demo_users() {
        let user = market.users().provision(record)?;
        labels.bind(label, user.id);
    }

    for seed in ITEMS.iter().rev() {
        let phone = market
            .users()
            .get(&seed.owner)?
            .map(|u| u.phone)
            .unwrap_or_default();
        let item = market.items().create(NewItem {
            owner_id: seed.owner,
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            category: seed.category.to_string(),
            location: seed.location.to_string(),
            price_per_day: seed.price_per_day,
            contact_phone: phone,
            image_url: format!("https://picsum.photos/id/{}/400/300", seed.photo),
        })?;
        if seed.status != ItemStatus::Pending {
            market.items().set_status(&item.id, seed.status)?;
        }
        if seed.featured {
            market.items().toggle_featured(&item.id)?;
        }
        labels.bind(seed.label, item.id);
    }

    tracing::info!(
        users = market.users().len()?,
        items = market.items().len()?,
        "Seeded demo data"
    );
    Ok(())
}

fn demo_users() -> Vec<(&'static str, ProvisionedUser)> {
    vec![
        (
            "admin",
            ProvisionedUser {
                id: ADMIN_ID,
                name: "Admin User".to_string(),
                email: "admin@sewalokal.com".to_string(),
                phone: "60199999999".to_string(),
                role: UserRole::Admin,
                bio: Some("Official Admin Account".to_string()),
                avatar_url: Some(avatar("Admin+User", "6b21a8")),
                join_date: joined(2023, 1, 1),
                is_verified: true,
                has_selfie_verified: true,
                selfie_ref: None,
            },
        ),
        (
            "ali",
            ProvisionedUser {
                id: ALI_ID,
                name: "Ali Hardware".to_string(),
                email: "ali@gmail.com".to_string(),
                phone: "60123456789".to_string(),
                role: UserRole::Owner,
                bio: Some(
                    "Menyediakan pelbagai alatan pertukangan dan hardware berkualiti. Lokasi di Precint 9."
                        .to_string(),
                ),
                avatar_url: Some(avatar("Ali+Hardware", "0d9488")),
                join_date: joined(2023, 5, 15),
                is_verified: true,
                has_selfie_verified: false,
                selfie_ref: None,
            },
        ),
        (
            "siti",
            ProvisionedUser {
                id: SITI_ID,
                name: "Siti Party".to_string(),
                email: "siti@gmail.com".to_string(),
                phone: "60133344455".to_string(),
                role: UserRole::Owner,
                bio: Some("Sewa barang party, khemah dan PA system. Harga boleh bincang.".to_string()),
                avatar_url: Some(avatar("Siti+Party", "db2777")),
                join_date: joined(2023, 6, 20),
                is_verified: false,
                has_selfie_verified: false,
                selfie_ref: None,
            },
        ),
    ]
}

fn avatar(name: &str, background: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background={}&color=fff",
        name, background
    )
}

fn joined(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}
