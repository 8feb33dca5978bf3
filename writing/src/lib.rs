//! # Simple Writing Domain
//!
//! Shared domain logic for the Simple Writing app.
//!
//! Everything here is pure: word counting and truncation, the subscription
//! profile model, and the quota policy that gates a transformation request.
//! No I/O happens in this crate, so the `editor` workflow and the `server`
//! proxy can both depend on it and agree on the same limits.

pub mod policy;
pub mod profile;
pub mod text;

use serde::{Deserialize, Serialize};

pub use profile::{Profile, Tier};
pub use text::{count_words, limit_to_max_words, Limited};

/// Which rewrite the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformMode {
    /// Polished, formal rewrite.
    Professional,
    /// Casual, plain-language simplification.
    Simplify,
}
