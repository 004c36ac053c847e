// crates/sewa-core/src/item.rs

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SewaError;

/// Moderation state of a listing.
///
/// Any state may move to any other state: an admin can re-review an active
/// listing (active -> pending) or reinstate a rejected one (rejected -> active).
///
///   pending <--> active <--> rejected
///      ^______________________^
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Submitted by an owner, waiting for an admin.
    Pending,
    /// Approved and publicly visible.
    Active,
    /// Refused by an admin. Hidden from the public catalog.
    Rejected,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Pending => "pending",
            ItemStatus::Active => "active",
            ItemStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = SewaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ItemStatus::Pending),
            "active" => Ok(ItemStatus::Active),
            "rejected" => Ok(ItemStatus::Rejected),
            other => Err(SewaError::validation(format!(
                "unknown status '{}' (expected pending, active or rejected)",
                other
            ))),
        }
    }
}

/// Fixed set of listing categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    ToolsHardware,
    CampingOutdoor,
    ElectronicsGadgets,
    PartyEvents,
    BabyGear,
    ClothingCostumes,
    Furniture,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::ToolsHardware,
        Category::CampingOutdoor,
        Category::ElectronicsGadgets,
        Category::PartyEvents,
        Category::BabyGear,
        Category::ClothingCostumes,
        Category::Furniture,
        Category::Other,
    ];

    /// Display label, which is also the wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ToolsHardware => "Tools & Hardware",
            Category::CampingOutdoor => "Camping & Outdoor",
            Category::ElectronicsGadgets => "Electronics & Gadgets",
            Category::PartyEvents => "Party & Events",
            Category::BabyGear => "Barang Bayi",
            Category::ClothingCostumes => "Pakaian & Kostum",
            Category::Furniture => "Perabot",
            Category::Other => "Lain-lain",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SewaError;

    /// Exact match against the display labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| SewaError::validation(format!("unknown category '{}'", s)))
    }
}

impl TryFrom<String> for Category {
    type Error = SewaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.as_str().to_string()
    }
}

/// Fixed set of pickup locations around the township.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum Location {
    /// Residential precinct, numbered 1 through 16.
    Precinct(u8),
    /// "Lot kedai 1 (Shell)".
    ShellShopLot,
    /// "Lot kedai 2 (TMB)".
    TmbShopLot,
    Tasek,
}

impl Location {
    pub const PRECINCT_COUNT: u8 = 16;

    /// Every location in display order.
    pub fn all() -> Vec<Location> {
        let mut all: Vec<Location> = (1..=Self::PRECINCT_COUNT).map(Location::Precinct).collect();
        all.extend([Location::ShellShopLot, Location::TmbShopLot, Location::Tasek]);
        all
    }

    /// Display label, which is also the wire form. The precinct spelling
    /// matches the labels residents already know.
    pub fn label(&self) -> String {
        match self {
            Location::Precinct(n) => format!("Precint {}", n),
            Location::ShellShopLot => "Lot kedai 1 (Shell)".to_string(),
            Location::TmbShopLot => "Lot kedai 2 (TMB)".to_string(),
            Location::Tasek => "Tasek".to_string(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Location {
    type Err = SewaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || SewaError::validation(format!("unknown location '{}'", s));
        match s {
            "Lot kedai 1 (Shell)" => Ok(Location::ShellShopLot),
            "Lot kedai 2 (TMB)" => Ok(Location::TmbShopLot),
            "Tasek" => Ok(Location::Tasek),
            _ => {
                let rest = s.strip_prefix("Precint ").ok_or_else(unknown)?;
                // "Precint 07" parses to 7 but is not a label we publish.
                match rest.parse::<u8>() {
                    Ok(n) if (1..=Self::PRECINCT_COUNT).contains(&n) && n.to_string() == rest => {
                        Ok(Location::Precinct(n))
                    }
                    _ => Err(unknown()),
                }
            }
        }
    }
}

impl TryFrom<String> for Location {
    type Error = SewaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Location> for String {
    fn from(l: Location) -> Self {
        l.label()
    }
}

/// A rental listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Unique identifier (UUID v7 for time-ordering).
    pub id: Uuid,
    /// Owning user. Weak reference: the user may no longer exist.
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub location: Location,
    /// Ringgit per day. Zero means the price is negotiable.
    pub price_per_day: u32,
    /// Phone number captured at submission, independent of the owner's profile.
    pub contact_phone: String,
    pub image_url: String,
    /// Moderation state (admin-controlled).
    pub status: ItemStatus,
    /// Promotion flag (admin-controlled).
    pub is_featured: bool,
    /// Currently rentable (owner-controlled).
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Whether the listing may appear in the public catalog.
    pub fn is_public(&self) -> bool {
        self.status == ItemStatus::Active
    }

    pub fn is_negotiable(&self) -> bool {
        self.price_per_day == 0
    }

    /// Short price label as shown on listing cards.
    pub fn price_label(&self) -> String {
        if self.is_negotiable() {
            "Nego".to_string()
        } else {
            format!("RM{} / hari", self.price_per_day)
        }
    }
}

/// Owner-supplied fields for a new listing.
///
/// Status, featured and availability are deliberately absent: a new listing
/// is always pending, not featured and available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    pub owner_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Category label; validated against [`Category::ALL`].
    pub category: String,
    /// Location label; validated against [`Location::all`].
    pub location: String,
    /// Signed so that a negative form value is rejected rather than wrapped.
    #[serde(default)]
    pub price_per_day: i64,
    pub contact_phone: String,
    #[serde(default)]
    pub image_url: String,
}

impl NewItem {
    /// Validate and convert the loosely typed fields.
    pub fn validated(&self) -> Result<(Category, Location, u32), SewaError> {
        if self.title.trim().is_empty() {
            return Err(SewaError::validation("title must not be empty"));
        }
        let category: Category = self.category.parse()?;
        let location: Location = self.location.parse()?;
        if self.price_per_day < 0 {
            return Err(SewaError::validation(format!(
                "price per day must be >= 0, got {}",
                self.price_per_day
            )));
        }
        let price = u32::try_from(self.price_per_day).map_err(|_| {
            SewaError::validation(format!("price per day {} is out of range", self.price_per_day))
        })?;
        Ok((category, location, price))
    }
}
