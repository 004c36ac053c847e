// crates/sewa-cli/src/replay.rs
//
// Scripted marketplace sessions. A script is a JSON array of steps; each
// step names an action, its arguments, and optionally a label (`"as"`) that
// later steps can refer to as `@label`.
//
// ```json
// [
//   {"action": "register", "name": "Ah Chong", "email": "ac@gmail.com", "phone": "60112223333", "as": "ahchong"},
//   {"action": "submit_listing", "owner": "@ahchong", "as": "saw",
//    "listing": {"title": "Gergaji Elektrik", "category": "Tools & Hardware", "location": "Precint 11", "price_per_day": 20}},
//   {"action": "approve", "item": "@saw"}
// ]
// ```

use serde::{Deserialize, Serialize};
use tabled::Tabled;
use uuid::Uuid;

use sewa_core::error::SewaError;
use sewa_core::item::ItemStatus;
use sewa_core::traits::DescriptionGenerator;
use sewa_core::user::UserPatch;
use sewa_workflow::{ListingDraft, Marketplace};

use crate::labels::Labels;

/// One marketplace action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Register {
        name: String,
        email: String,
        phone: String,
    },
    UpdateProfile {
        user: String,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        phone: Option<String>,
        #[serde(default)]
        bio: Option<String>,
        #[serde(default)]
        avatar_url: Option<String>,
    },
    SubmitSelfie {
        user: String,
        image_ref: String,
    },
    SubmitListing {
        owner: String,
        listing: ListingDraft,
        /// Ask the description generator when the description is blank.
        #[serde(default)]
        generate: bool,
    },
    Approve {
        item: String,
    },
    Reject {
        item: String,
    },
    SetStatus {
        item: String,
        status: ItemStatus,
    },
    ToggleFeatured {
        item: String,
    },
    ToggleAvailability {
        owner: String,
        item: String,
    },
    DeleteListing {
        item: String,
    },
    Verify {
        user: String,
    },
    Unverify {
        user: String,
    },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Register { .. } => "register",
            Action::UpdateProfile { .. } => "update_profile",
            Action::SubmitSelfie { .. } => "submit_selfie",
            Action::SubmitListing { .. } => "submit_listing",
            Action::Approve { .. } => "approve",
            Action::Reject { .. } => "reject",
            Action::SetStatus { .. } => "set_status",
            Action::ToggleFeatured { .. } => "toggle_featured",
            Action::ToggleAvailability { .. } => "toggle_availability",
            Action::DeleteListing { .. } => "delete_listing",
            Action::Verify { .. } => "verify",
            Action::Unverify { .. } => "unverify",
        }
    }
}

/// An action plus an optional label for the record it produces or touches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    #[serde(flatten)]
    pub action: Action,
    #[serde(default, rename = "as", skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,
}

/// What happened to one step.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct StepReport {
    #[tabled(rename = "#")]
    pub step: usize,
    pub action: String,
    pub ok: bool,
    pub detail: String,
}

/// Parse a script from JSON text.
pub fn parse(text: &str) -> Result<Vec<Step>, SewaError> {
    Ok(serde_json::from_str(text)?)
}

/// Read and parse a script file.
pub fn load(path: &str) -> Result<Vec<Step>, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(parse(&contents)?)
}

/// Apply every step in order. A failing step is reported and skipped; later
/// steps still run.
pub async fn run(
    market: &Marketplace,
    labels: &mut Labels,
    generator: &dyn DescriptionGenerator,
    steps: Vec<Step>,
) -> Vec<StepReport> {
    let mut reports = Vec::with_capacity(steps.len());
    for (n, step) in steps.into_iter().enumerate() {
        let action = step.action.name();
        let outcome = apply(market, labels, generator, step.action).await;
        let report = match outcome {
            Ok((id, detail)) => {
                if let Some(label) = &step.bind {
                    labels.bind(label, id);
                }
                tracing::info!(step = n + 1, action, %id, "Replay step applied");
                StepReport { step: n + 1, action: action.to_string(), ok: true, detail }
            }
            Err(e) => {
                tracing::warn!(step = n + 1, action, "Replay step failed: {}", e);
                StepReport { step: n + 1, action: action.to_string(), ok: false, detail: e.to_string() }
            }
        };
        reports.push(report);
    }
    reports
}

/// Apply one action. Returns the id of the record it touched and a summary.
async fn apply(
    market: &Marketplace,
    labels: &Labels,
    generator: &dyn DescriptionGenerator,
    action: Action,
) -> Result<(Uuid, String), SewaError> {
    let admin = market.moderation();
    let owner = market.owner();
    match action {
        Action::Register { name, email, phone } => {
            let user = market.users().register(&name, &email, &phone)?;
            Ok((user.id, format!("{} joined, trust {}", user.name, user.trust_score)))
        }
        Action::UpdateProfile { user, name, phone, bio, avatar_url } => {
            let patch = UserPatch { name, phone, bio, avatar_url };
            let user = owner.update_profile(&labels.resolve(&user)?, patch)?;
            Ok((user.id, format!("{} trust {}", user.name, user.trust_score)))
        }
        Action::SubmitSelfie { user, image_ref } => {
            let user = owner.submit_selfie(&labels.resolve(&user)?, &image_ref)?;
            Ok((user.id, format!("{} trust {}", user.name, user.trust_score)))
        }
        Action::SubmitListing { owner: who, listing, generate } => {
            let gen = if generate { Some(generator) } else { None };
            let item = owner.submit_listing(&labels.resolve(&who)?, listing, gen).await?;
            Ok((item.id, format!("'{}' submitted ({})", item.title, item.status)))
        }
        Action::Approve { item } => {
            let item = admin.approve(&labels.resolve(&item)?)?;
            Ok((item.id, format!("'{}' {}", item.title, item.status)))
        }
        Action::Reject { item } => {
            let item = admin.reject(&labels.resolve(&item)?)?;
            Ok((item.id, format!("'{}' {}", item.title, item.status)))
        }
        Action::SetStatus { item, status } => {
            let item = admin.set_status(&labels.resolve(&item)?, status)?;
            Ok((item.id, format!("'{}' {}", item.title, item.status)))
        }
        Action::ToggleFeatured { item } => {
            let item = admin.toggle_featured(&labels.resolve(&item)?)?;
            Ok((item.id, format!("'{}' featured={}", item.title, item.is_featured)))
        }
        Action::ToggleAvailability { owner: who, item } => {
            let item = owner.toggle_availability(&labels.resolve(&who)?, &labels.resolve(&item)?)?;
            Ok((item.id, format!("'{}' available={}", item.title, item.is_available)))
        }
        Action::DeleteListing { item } => {
            let id = labels.resolve(&item)?;
            admin.delete_listing(&id)?;
            Ok((id, "deleted".to_string()))
        }
        Action::Verify { user } => {
            let user = admin.verify_user(&labels.resolve(&user)?)?;
            Ok((user.id, format!("{} trust {}", user.name, user.trust_score)))
        }
        Action::Unverify { user } => {
            let user = admin.unverify_user(&labels.resolve(&user)?)?;
            Ok((user.id, format!("{} trust {}", user.name, user.trust_score)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sewa_catalog::{CatalogQuery, SponsoredFeed};
    use sewa_describe::StaticDescriber;

    const SCRIPT: &str = r#"[
        {"action": "register", "name": "Ah Chong", "email": "ac@gmail.com", "phone": "60112223333", "as": "ahchong"},
        {"action": "update_profile", "user": "@ahchong", "bio": "Kedai hardware sejak 1998"},
        {"action": "submit_selfie", "user": "@ahchong", "image_ref": "selfie-1.jpg"},
        {"action": "submit_listing", "owner": "@ahchong", "as": "saw", "generate": true,
         "listing": {"title": "Gergaji Elektrik", "category": "Tools & Hardware", "location": "Precint 11", "price_per_day": 20}},
        {"action": "submit_listing", "owner": "@ahchong",
         "listing": {"title": "Bot", "category": "Boats", "location": "Tasek"}},
        {"action": "approve", "item": "@saw"},
        {"action": "toggle_featured", "item": "@saw"},
        {"action": "verify", "user": "@ahchong"},
        {"action": "approve", "item": "@missing"}
    ]"#;

    #[test]
    fn script_parses_with_labels() {
        let steps = parse(SCRIPT).unwrap();
        assert_eq!(steps.len(), 9);
        assert_eq!(steps[0].bind.as_deref(), Some("ahchong"));
        assert_eq!(steps[1].bind, None);
        assert!(matches!(steps[3].action, Action::SubmitListing { generate: true, .. }));
    }

    #[test]
    fn unknown_action_is_a_parse_error() {
        let err = parse(r#"[{"action": "refund", "item": "@x"}]"#).unwrap_err();
        assert!(matches!(err, SewaError::Serialization(_)));
    }

    #[tokio::test]
    async fn failures_are_reported_and_script_continues() {
        let market = Marketplace::new();
        let mut labels = Labels::default();
        let gen = StaticDescriber::new("Gergaji dalam keadaan baik.");
        let reports = run(&market, &mut labels, &gen, parse(SCRIPT).unwrap()).await;

        let oks: Vec<bool> = reports.iter().map(|r| r.ok).collect();
        assert_eq!(oks, vec![true, true, true, true, false, true, true, true, false]);
        assert!(reports[4].detail.contains("Boats"));
        assert!(reports[8].detail.contains("@missing"));

        let ahchong = labels.resolve("@ahchong").unwrap();
        assert_eq!(market.users().get(&ahchong).unwrap().unwrap().trust_score, 100);

        let saw = labels.resolve("@saw").unwrap();
        let item = market.items().get(&saw).unwrap().unwrap();
        assert_eq!(item.description, "Gergaji dalam keadaan baik.");
        assert!(item.is_featured);

        let page = market
            .catalog(SponsoredFeed::empty())
            .browse(&CatalogQuery::new())
            .unwrap();
        assert_eq!(page.listing_count, 1);
    }
}
