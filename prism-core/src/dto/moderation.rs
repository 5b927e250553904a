//! Moderation envelopes

use serde::{Deserialize, Serialize};

use crate::domain::moderation::ModerationVerdict;

/// Request to `POST /moderation`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationRequest {
    pub input_message: String,
}

/// Response from `POST /moderation`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationResponse {
    pub output: ModerationVerdict,
}
