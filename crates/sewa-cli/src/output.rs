// crates/sewa-cli/src/output.rs
//
// Output formatting utilities for the sewa CLI.
// Supports table and JSON output modes.

use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed table output (default).
    Table,
    /// JSON output for machine consumption.
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }
}

/// Format a slice of Tabled items as a table string.
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    Table::new(data).to_string()
}

/// Format a serializable value as a pretty-printed JSON string.
pub fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|e| format!("JSON serialization error: {}", e))
}

/// First eight characters of an id, enough to tell rows apart.
pub fn short_id(id: &uuid::Uuid) -> String {
    id.to_string().chars().take(8).collect()
}

/// Render a flag as a checkmark column.
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "-"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled, Serialize)]
    struct Row {
        name: String,
        score: u8,
    }

    #[test]
    fn table_has_header_and_rows() {
        let rows = vec![Row { name: "Siti Party".to_string(), score: 60 }];
        let table = format_table(&rows);
        assert!(table.contains("name"));
        assert!(table.contains("Siti Party"));
        assert!(table.contains("60"));
    }

    #[test]
    fn json_is_pretty() {
        let json = format_json(&Row { name: "Ali".to_string(), score: 80 });
        assert!(json.contains("\n  \"score\": 80"));
    }

    #[test]
    fn short_id_is_prefix() {
        let id = uuid::Uuid::from_u128(0x5e3a_0000_0000_0000_0000_0000_0000_0001);
        assert_eq!(short_id(&id), "5e3a0000");
    }
}
