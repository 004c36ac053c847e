// crates/sewa-core/src/trust.rs
//
// Trust score for marketplace accounts.
//
// The score is additive over profile-completeness and verification signals
// and is always recomputed from scratch. Nothing outside this module decides
// what a score is.

use serde::{Deserialize, Serialize};

use crate::user::User;

/// Awarded to every account that exists.
pub const BASE_SCORE: u8 = 40;
/// Awarded for a bio longer than [`BIO_MIN_CHARS`] characters.
pub const BIO_BONUS: u8 = 10;
/// Awarded for a phone number on file.
pub const PHONE_BONUS: u8 = 10;
/// Awarded for a submitted selfie.
pub const SELFIE_BONUS: u8 = 20;
/// Awarded for admin verification.
pub const ADMIN_VERIFIED_BONUS: u8 = 20;
/// Upper bound of the score.
pub const MAX_SCORE: u8 = 100;
/// A bio must be strictly longer than this to earn the bonus.
pub const BIO_MIN_CHARS: usize = 10;
/// Scores at or above this are shown as highly trusted.
pub const HIGH_TRUST_THRESHOLD: u8 = 80;

/// Pure function from user attributes to a score in [0, 100].
#[derive(Debug, Clone, Copy, Default)]
pub struct TrustScoreCalculator;

impl TrustScoreCalculator {
    /// Compute the trust score for a user. Ignores the user's current
    /// `trust_score` field.
    pub fn compute(user: &User) -> u8 {
        TrustBreakdown::of(user).total()
    }
}

/// Which score components a user has earned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrustBreakdown {
    pub bio: bool,
    pub phone: bool,
    pub selfie: bool,
    pub admin_verified: bool,
}

impl TrustBreakdown {
    pub fn of(user: &User) -> Self {
        Self {
            bio: user.bio_text().chars().count() > BIO_MIN_CHARS,
            phone: user.has_phone(),
            selfie: user.has_selfie_verified,
            admin_verified: user.is_verified,
        }
    }

    /// Sum of earned components, capped at [`MAX_SCORE`].
    pub fn total(&self) -> u8 {
        let mut score = u32::from(BASE_SCORE);
        if self.bio {
            score += u32::from(BIO_BONUS);
        }
        if self.phone {
            score += u32::from(PHONE_BONUS);
        }
        if self.selfie {
            score += u32::from(SELFIE_BONUS);
        }
        if self.admin_verified {
            score += u32::from(ADMIN_VERIFIED_BONUS);
        }
        score.min(u32::from(MAX_SCORE)) as u8
    }

    /// Points still on the table, as (label, points) pairs.
    pub fn missing(&self) -> Vec<(&'static str, u8)> {
        let mut out = Vec::new();
        if !self.bio {
            out.push(("bio", BIO_BONUS));
        }
        if !self.phone {
            out.push(("phone", PHONE_BONUS));
        }
        if !self.selfie {
            out.push(("selfie", SELFIE_BONUS));
        }
        if !self.admin_verified {
            out.push(("admin_verified", ADMIN_VERIFIED_BONUS));
        }
        out
    }
}

/// Coarse banding of a score for display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrustLevel {
    /// [`HIGH_TRUST_THRESHOLD`] and above.
    High,
    Building,
}

impl TrustLevel {
    pub fn of(score: u8) -> Self {
        if score >= HIGH_TRUST_THRESHOLD {
            TrustLevel::High
        } else {
            TrustLevel::Building
        }
    }
}
