use thiserror::Error;

/// Error taxonomy for the listing lifecycle and trust-scoring engine.
///
/// Every variant is a local, recoverable condition reported to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SewaError {
    /// Malformed or out-of-domain input (empty identity field, unknown
    /// category or location, negative price, invalid status value).
    #[error("Validation error: {0}")]
    Validation(String),

    /// An operation referenced an id absent from the store.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An owner tried to act on a listing belonging to someone else.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Store lock was poisoned by a panicking writer.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SewaError {
    /// Shorthand for a `Validation` error.
    pub fn validation(msg: impl Into<String>) -> Self {
        SewaError::Validation(msg.into())
    }

    /// Shorthand for a `NotFound` error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        SewaError::NotFound(msg.into())
    }

    /// True for `Validation` errors.
    pub fn is_validation(&self) -> bool {
        matches!(self, SewaError::Validation(_))
    }

    /// True for `NotFound` errors.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SewaError::NotFound(_))
    }
}

impl From<serde_json::Error> for SewaError {
    fn from(e: serde_json::Error) -> Self {
        SewaError::Serialization(e.to_string())
    }
}
