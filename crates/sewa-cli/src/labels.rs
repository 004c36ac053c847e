// crates/sewa-cli/src/labels.rs
//
// Human-friendly names for records: `@ali`, `@drill`. Anywhere the CLI takes
// an id it also accepts a bound label.

use std::collections::HashMap;

use uuid::Uuid;

use sewa_core::error::SewaError;

#[derive(Debug, Clone, Default)]
pub struct Labels {
    map: HashMap<String, Uuid>,
}

impl Labels {
    /// Bind `label` (with or without the leading `@`) to `id`, replacing any
    /// earlier binding.
    pub fn bind(&mut self, label: &str, id: Uuid) {
        let name = label.trim().trim_start_matches('@').to_string();
        if let Some(prev) = self.map.insert(name.clone(), id) {
            tracing::debug!(label = %name, previous = %prev, "Label rebound");
        }
    }

    /// Turn `@label` or a literal UUID into an id.
    pub fn resolve(&self, reference: &str) -> Result<Uuid, SewaError> {
        let reference = reference.trim();
        match reference.strip_prefix('@') {
            Some(name) => self
                .map
                .get(name)
                .copied()
                .ok_or_else(|| SewaError::not_found(format!("label @{}", name))),
            None => Uuid::parse_str(reference).map_err(|e| {
                SewaError::validation(format!("'{}' is neither a UUID nor an @label: {}", reference, e))
            }),
        }
    }
}
