// crates/sewa-store/src/users.rs
//
// In-memory user store. The only writer of `User::trust_score`: every
// mutation that can change a scoring input recomputes the score while the
// write guard is still held.

use std::sync::{Arc, RwLock};

use uuid::Uuid;

use sewa_core::clock::{Clock, SystemClock};
use sewa_core::error::SewaError;
use sewa_core::trust::TrustScoreCalculator;
use sewa_core::user::{ProvisionedUser, User, UserPatch, UserRole};

use crate::poisoned;

/// Users in insertion order.
#[derive(Debug)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
    clock: Arc<dyn Clock>,
}

impl UserStore {
    /// Create an empty store using wall-clock time for join dates.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty store with an explicit time source.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            clock,
        }
    }

    /// Register a new owner account.
    ///
    /// Name, email and phone are required. The new account has no bio and no
    /// verification, so a registered user starts at 50 (base plus phone).
    pub fn register(&self, name: &str, email: &str, phone: &str) -> Result<User, SewaError> {
        require_non_empty("name", name)?;
        require_non_empty("email", email)?;
        require_non_empty("phone", phone)?;

        let mut user = User {
            id: Uuid::now_v7(),
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
            role: UserRole::Owner,
            bio: None,
            avatar_url: None,
            join_date: self.clock.now(),
            is_verified: false,
            has_selfie_verified: false,
            selfie_ref: None,
            trust_score: 0,
        };
        rescore(&mut user);

        let mut users = self.users.write().map_err(poisoned)?;
        users.push(user.clone());
        tracing::info!(user_id = %user.id, trust_score = user.trust_score, "Registered owner");
        Ok(user)
    }

    /// Insert a pre-provisioned account (admin, seed data).
    ///
    /// The caller chooses id, role and flags; the trust score is still
    /// computed here.
    pub fn provision(&self, record: ProvisionedUser) -> Result<User, SewaError> {
        require_non_empty("name", &record.name)?;
        require_non_empty("email", &record.email)?;
        if record.has_selfie_verified && record.selfie_ref.is_none() {
            tracing::debug!(user_id = %record.id, "Provisioned selfie flag without image reference");
        }

        let mut user = record.into_user_unscored();
        rescore(&mut user);

        let mut users = self.users.write().map_err(poisoned)?;
        if users.iter().any(|u| u.id == user.id) {
            return Err(SewaError::validation(format!("user {} already exists", user.id)));
        }
        users.push(user.clone());
        tracing::debug!(user_id = %user.id, role = %user.role, "Provisioned user");
        Ok(user)
    }

    /// Merge a profile patch into an existing user and recompute the score.
    pub fn update(&self, id: &Uuid, patch: UserPatch) -> Result<User, SewaError> {
        if let Some(name) = &patch.name {
            require_non_empty("name", name)?;
        }
        self.mutate(id, |user| {
            if let Some(name) = patch.name {
                user.name = name.trim().to_string();
            }
            if let Some(phone) = patch.phone {
                user.phone = phone.trim().to_string();
            }
            if let Some(bio) = patch.bio {
                user.bio = if bio.is_empty() { None } else { Some(bio) };
            }
            if let Some(url) = patch.avatar_url {
                user.avatar_url = if url.trim().is_empty() { None } else { Some(url) };
            }
        })
    }

    /// Set or clear the admin verification flag.
    pub fn set_admin_verified(&self, id: &Uuid, verified: bool) -> Result<User, SewaError> {
        self.mutate(id, |user| user.is_verified = verified)
    }

    /// Flip the admin verification flag in one step.
    pub fn toggle_admin_verified(&self, id: &Uuid) -> Result<User, SewaError> {
        self.mutate(id, |user| user.is_verified = !user.is_verified)
    }

    /// Record a selfie submission.
    ///
    /// Re-submitting replaces the stored reference; the selfie bonus is a
    /// flag, so it is never counted twice.
    pub fn set_selfie_verified(&self, id: &Uuid, image_ref: &str) -> Result<User, SewaError> {
        require_non_empty("selfie image reference", image_ref)?;
        self.mutate(id, |user| {
            user.has_selfie_verified = true;
            user.selfie_ref = Some(image_ref.to_string());
        })
    }

    /// Look up a user by id.
    pub fn get(&self, id: &Uuid) -> Result<Option<User>, SewaError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.iter().find(|u| u.id == *id).cloned())
    }

    /// All users in insertion order.
    pub fn list(&self) -> Result<Vec<User>, SewaError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.clone())
    }

    /// Number of users.
    pub fn len(&self) -> Result<usize, SewaError> {
        Ok(self.users.read().map_err(poisoned)?.len())
    }

    /// Whether the store holds no users.
    pub fn is_empty(&self) -> Result<bool, SewaError> {
        Ok(self.len()? == 0)
    }

    /// Apply `f` to the user under the write guard, then rescore.
    fn mutate<F>(&self, id: &Uuid, f: F) -> Result<User, SewaError>
    where
        F: FnOnce(&mut User),
    {
        let mut users = self.users.write().map_err(poisoned)?;
        let user = users
            .iter_mut()
            .find(|u| u.id == *id)
            .ok_or_else(|| SewaError::not_found(format!("user {}", id)))?;

        let before = user.trust_score;
        f(user);
        rescore(user);
        if before != user.trust_score {
            tracing::info!(
                user_id = %id,
                from = before,
                to = user.trust_score,
                "Trust score changed"
            );
        }
        Ok(user.clone())
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

fn rescore(user: &mut User) {
    user.trust_score = TrustScoreCalculator::compute(user);
}

fn require_non_empty(field: &str, value: &str) -> Result<(), SewaError> {
    if value.trim().is_empty() {
        Err(SewaError::validation(format!("{} must not be empty", field)))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use sewa_core::FixedClock;
    use std::thread;

    fn store() -> UserStore {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        UserStore::with_clock(Arc::new(FixedClock(at)))
    }

    fn assert_score_consistent(user: &User) {
        assert_eq!(user.trust_score, TrustScoreCalculator::compute(user));
    }

    #[test]
    fn register_applies_calculator() {
        let s = store();
        let u = s.register("Ali", "ali@gmail.com", "60123456789").unwrap();
        assert_eq!(u.role, UserRole::Owner);
        assert!(!u.is_verified);
        assert!(!u.has_selfie_verified);
        assert_eq!(u.trust_score, 50);
        assert_eq!(u.join_date, Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap());
        assert_eq!(s.get(&u.id).unwrap(), Some(u));
    }

    #[test]
    fn register_rejects_empty_identity_fields() {
        let s = store();
        assert!(s.register("", "a@b.c", "601").unwrap_err().is_validation());
        assert!(s.register("A", "  ", "601").unwrap_err().is_validation());
        assert!(s.register("A", "a@b.c", "").unwrap_err().is_validation());
        assert_eq!(s.len().unwrap(), 0);
    }

    #[test]
    fn score_progression_scenario() {
        let s = store();
        let u = s.register("Siti", "siti@gmail.com", "60123456789").unwrap();
        assert_eq!(u.trust_score, 50);

        let u = s
            .update(&u.id, UserPatch::default().with_bio("Sewa khemah PA!"))
            .unwrap();
        assert_eq!(u.bio_text().chars().count(), 15);
        assert_eq!(u.trust_score, 60);

        let u = s.set_selfie_verified(&u.id, "selfie://siti/1").unwrap();
        assert_eq!(u.trust_score, 80);

        let u = s.set_admin_verified(&u.id, true).unwrap();
        assert_eq!(u.trust_score, 100);
        assert_score_consistent(&u);
    }

    #[test]
    fn update_recomputes_when_phone_cleared() {
        let s = store();
        let u = s.register("A", "a@b.c", "601").unwrap();
        let u = s.update(&u.id, UserPatch::default().with_phone("")).unwrap();
        assert_eq!(u.trust_score, 40);
        assert_score_consistent(&u);
    }

    #[test]
    fn update_unknown_user_is_not_found() {
        let s = store();
        let err = s
            .update(&Uuid::now_v7(), UserPatch::default().with_bio("x"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn update_rejects_blank_name() {
        let s = store();
        let u = s.register("A", "a@b.c", "601").unwrap();
        assert!(s
            .update(&u.id, UserPatch::default().with_name(" "))
            .unwrap_err()
            .is_validation());
        assert_eq!(s.get(&u.id).unwrap().unwrap().name, "A");
    }

    #[test]
    fn selfie_resubmission_replaces_reference_without_double_count() {
        let s = store();
        let u = s.register("A", "a@b.c", "601").unwrap();
        let first = s.set_selfie_verified(&u.id, "img-1").unwrap();
        let second = s.set_selfie_verified(&u.id, "img-2").unwrap();
        assert_eq!(first.trust_score, second.trust_score);
        assert_eq!(second.selfie_ref.as_deref(), Some("img-2"));
        assert!(s.set_selfie_verified(&u.id, "").unwrap_err().is_validation());
    }

    #[test]
    fn admin_verification_is_reversible() {
        let s = store();
        let u = s.register("A", "a@b.c", "601").unwrap();
        assert_eq!(s.set_admin_verified(&u.id, true).unwrap().trust_score, 70);
        assert_eq!(s.set_admin_verified(&u.id, false).unwrap().trust_score, 50);
        assert!(s.toggle_admin_verified(&u.id).unwrap().is_verified);
        assert!(!s.toggle_admin_verified(&u.id).unwrap().is_verified);
    }

    #[test]
    fn provision_computes_score_and_rejects_duplicates() {
        let s = store();
        let record = ProvisionedUser {
            id: Uuid::from_u128(1),
            name: "Admin User".to_string(),
            email: "admin@sewalokal.com".to_string(),
            phone: "60199999999".to_string(),
            role: UserRole::Admin,
            bio: Some("Official Admin Account".to_string()),
            avatar_url: None,
            join_date: Utc::now(),
            is_verified: true,
            has_selfie_verified: true,
            selfie_ref: None,
        };
        let admin = s.provision(record.clone()).unwrap();
        assert_eq!(admin.trust_score, 100);
        assert_eq!(admin.role, UserRole::Admin);
        assert!(s.provision(record).unwrap_err().is_validation());
    }

    #[test]
    fn list_preserves_insertion_order() {
        let s = store();
        let a = s.register("A", "a@b.c", "1").unwrap();
        let b = s.register("B", "b@b.c", "2").unwrap();
        let c = s.register("C", "c@b.c", "3").unwrap();
        let ids: Vec<Uuid> = s.list().unwrap().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
    }

    #[test]
    fn concurrent_patches_never_leave_a_stale_score() {
        let s = Arc::new(store());
        let u = s.register("A", "a@b.c", "601").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let s = s.clone();
                let id = u.id;
                thread::spawn(move || {
                    for j in 0..50 {
                        let patch = if (i + j) % 2 == 0 {
                            UserPatch::default().with_bio("a bio long enough").with_phone("")
                        } else {
                            UserPatch::default().with_bio("").with_phone("601")
                        };
                        let updated = s.update(&id, patch).unwrap();
                        assert_eq!(updated.trust_score, TrustScoreCalculator::compute(&updated));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let last = s.get(&u.id).unwrap().unwrap();
        assert_score_consistent(&last);
        assert_eq!(last.trust_score, 50);
    }
}
