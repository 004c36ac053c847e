// crates/sewa-describe/src/fixed.rs

use async_trait::async_trait;

use sewa_core::traits::DescriptionGenerator;

/// Offline generator that always answers with the same text.
#[derive(Debug, Clone)]
pub struct StaticDescriber {
    text: String,
}

impl StaticDescriber {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Default for StaticDescriber {
    fn default() -> Self {
        Self::new(crate::NOT_CONFIGURED)
    }
}

#[async_trait]
impl DescriptionGenerator for StaticDescriber {
    async fn describe(&self, title: &str, _category: &str, _location: &str) -> String {
        tracing::debug!(title, "Static description");
        self.text.clone()
    }
}
