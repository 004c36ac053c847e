// crates/sewa-cli/src/commands/users.rs
//
// `sewa users`: admin view of every account and its trust score.

use tabled::Tabled;

use crate::app::App;
use crate::output::{format_json, format_table, short_id, yes_no, OutputFormat};

#[derive(Tabled)]
struct UserRow {
    id: String,
    name: String,
    role: String,
    phone: String,
    selfie: &'static str,
    verified: &'static str,
    trust: u8,
}

/// Run the users subcommand.
pub fn run(app: &App) -> Result<(), Box<dyn std::error::Error>> {
    let users = app.market.moderation().users()?;

    if app.format == OutputFormat::Json {
        println!("{}", format_json(&users));
        return Ok(());
    }

    let rows: Vec<UserRow> = users
        .iter()
        .map(|u| UserRow {
            id: short_id(&u.id),
            name: u.name.clone(),
            role: u.role.to_string(),
            phone: u.phone.clone(),
            selfie: yes_no(u.has_selfie_verified),
            verified: yes_no(u.is_verified),
            trust: u.trust_score,
        })
        .collect();
    println!("{}", format_table(&rows));
    Ok(())
}
