// crates/sewa-cli/src/commands/profile.rs
//
// `sewa profile <ref>`: an owner's public profile, their active listings,
// and which trust signals they still lack.

use serde::Serialize;

use sewa_catalog::OwnerProfile;
use sewa_core::error::SewaError;
use sewa_core::trust::TrustBreakdown;

use crate::app::App;
use crate::output::{format_json, OutputFormat};

#[derive(Serialize)]
struct ProfileReport {
    #[serde(flatten)]
    profile: OwnerProfile,
    trust: TrustBreakdown,
}

/// Run the profile subcommand.
pub fn run(app: &App, reference: &str) -> Result<(), Box<dyn std::error::Error>> {
    let id = app.labels.resolve(reference)?;
    let profile = app
        .catalog()
        .owner_profile(&id)?
        .ok_or_else(|| SewaError::not_found(format!("user {}", id)))?;
    let trust = app.market.owner().trust_breakdown(&id)?;

    if app.format == OutputFormat::Json {
        println!("{}", format_json(&ProfileReport { profile, trust }));
        return Ok(());
    }

    let owner = &profile.owner;
    println!("{}", owner.name);
    println!("  Joined:      {}", owner.join_date.format("%Y-%m-%d"));
    println!("  Trust score: {}/100", owner.trust_score);
    println!(
        "  Verified:    {}",
        if owner.is_verified { "yes" } else { "not yet" }
    );
    if let Some(bio) = &profile.bio {
        println!("  Bio:         {}", bio);
    }
    let missing = trust.missing();
    if !missing.is_empty() {
        let hints: Vec<String> = missing
            .iter()
            .map(|(signal, points)| format!("{} (+{})", signal, points))
            .collect();
        println!("  To improve:  {}", hints.join(", "));
    }
    println!();
    if profile.listings.is_empty() {
        println!("No active listings.");
    }
    for item in &profile.listings {
        println!("  - {}  {}  {}", item.title, item.location, item.price_label());
    }
    Ok(())
}
