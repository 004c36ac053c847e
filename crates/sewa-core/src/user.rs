// crates/sewa-core/src/user.rs

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of an account on the marketplace.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Browses and contacts owners. No flow registers this role yet.
    Renter,
    /// Lists items for rent. Every self-registered account is an owner.
    Owner,
    /// Moderates listings and verifies users. Pre-provisioned only.
    Admin,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Renter => write!(f, "renter"),
            UserRole::Owner => write!(f, "owner"),
            UserRole::Admin => write!(f, "admin"),
        }
    }
}

/// A marketplace account.
///
/// `trust_score` is derived: only the user store writes it, always from
/// [`TrustScoreCalculator::compute`](crate::trust::TrustScoreCalculator::compute)
/// over the other fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier (UUID v7 for time-ordering).
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    /// Free-text profile blurb.
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub join_date: DateTime<Utc>,
    /// Set by an admin.
    pub is_verified: bool,
    /// Set by the owner submitting a selfie.
    pub has_selfie_verified: bool,
    /// Reference to the stored selfie image.
    pub selfie_ref: Option<String>,
    /// Derived score in [0, 100].
    pub trust_score: u8,
}

impl User {
    /// Whether a non-empty phone number is on file.
    pub fn has_phone(&self) -> bool {
        !self.phone.trim().is_empty()
    }

    /// Bio text, if any.
    pub fn bio_text(&self) -> &str {
        self.bio.as_deref().unwrap_or("")
    }
}

/// Partial profile update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UserPatch {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }
}

/// A pre-provisioned account (admin, seed data).
///
/// Carries everything a [`User`] has except the trust score, which the
/// store computes on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionedUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub join_date: DateTime<Utc>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub has_selfie_verified: bool,
    #[serde(default)]
    pub selfie_ref: Option<String>,
}

impl ProvisionedUser {
    /// Turn the provisioning record into a user with a placeholder score.
    /// The store overwrites the score before the record becomes visible.
    pub fn into_user_unscored(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            role: self.role,
            bio: self.bio,
            avatar_url: self.avatar_url,
            join_date: self.join_date,
            is_verified: self.is_verified,
            has_selfie_verified: self.has_selfie_verified,
            selfie_ref: self.selfie_ref,
            trust_score: 0,
        }
    }
}
