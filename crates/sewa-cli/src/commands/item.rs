// crates/sewa-cli/src/commands/item.rs
//
// `sewa item <ref>`: one listing with its owner card and contact link.

use sewa_catalog::OwnerCard;
use sewa_core::error::SewaError;
use sewa_core::trust::TrustLevel;

use crate::app::App;
use crate::output::{format_json, OutputFormat};

/// Run the item subcommand.
pub fn run(app: &App, reference: &str) -> Result<(), Box<dyn std::error::Error>> {
    let id = app.labels.resolve(reference)?;
    let detail = app
        .catalog()
        .listing_detail(&id)?
        .ok_or_else(|| SewaError::not_found(format!("item {}", id)))?;

    if app.format == OutputFormat::Json {
        println!("{}", format_json(&detail));
        return Ok(());
    }

    let item = &detail.item;
    println!("{}", item.title);
    println!("  ID:          {}", item.id);
    println!("  Status:      {}", item.status);
    println!("  Category:    {}", item.category);
    println!("  Location:    {}", item.location);
    println!("  Price:       {}", item.price_label());
    println!("  Available:   {}", if item.is_available { "yes" } else { "rented out" });
    println!("  Featured:    {}", if item.is_featured { "yes" } else { "no" });
    println!("  Listed:      {}", item.created_at.format("%Y-%m-%d %H:%M"));
    println!();
    println!("  {}", item.description);
    println!();
    match &detail.owner {
        OwnerCard::Found(owner) => {
            let badge = match owner.trust_level {
                TrustLevel::High => "Trusted Owner",
                TrustLevel::Building => "Building trust",
            };
            println!("  Owner:       {} ({})", owner.name, owner.id);
            println!("  Trust:       {}/100, {}", owner.trust_score, badge);
            println!("  Joined:      {}", owner.join_date.format("%Y-%m-%d"));
        }
        OwnerCard::Missing { owner_id } => {
            println!("  Owner:       unknown user {}", owner_id);
        }
    }
    println!("  Contact:     {}", detail.contact_link);
    Ok(())
}
