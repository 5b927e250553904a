//! Moderation domain types

use serde::{Deserialize, Serialize};

/// Verdict returned by the provider's moderation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationVerdict {
    /// Whether any category was flagged
    pub flagged: bool,
    /// Names of the categories that were flagged
    pub categories: Vec<String>,
}

impl ModerationVerdict {
    /// A verdict with nothing flagged
    pub fn clean() -> Self {
        Self {
            flagged: false,
            categories: Vec::new(),
        }
    }
}
