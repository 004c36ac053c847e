// crates/sewa-describe/src/lib.rs
//
// sewa-describe: Implementations of the `DescriptionGenerator` collaborator.
//
// `GeminiDescriber` asks a hosted language model for a short Malay listing
// blurb. `StaticDescriber` answers with fixed text and never touches the
// network. Neither ever returns an error: every failure degrades to a
// placeholder string the owner can overwrite.

pub mod fixed;
pub mod gemini;

pub use fixed::StaticDescriber;
pub use gemini::{DescribeError, GeminiDescriber, DEFAULT_MODEL};

/// Returned when no API key is configured.
pub const NOT_CONFIGURED: &str = "API Key not configured. Please fill description manually.";

/// Returned when the request or response handling fails.
pub const GENERATION_FAILED: &str =
    "Error generating description. Please try again or write manually.";

/// Returned when the model answers with no text.
pub const EMPTY_ANSWER: &str = "Failed to generate description.";
