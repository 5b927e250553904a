//! Embedding envelopes

use serde::{Deserialize, Serialize};

/// Request to `POST /embeddings`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingsRequest {
    pub input_text: String,
}

/// Response from `POST /embeddings`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingsResponse {
    pub output: EmbeddingsOutput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingsOutput {
    pub embedding: Vec<f32>,
}
