//! Image generation and vision envelopes

use serde::{Deserialize, Serialize};

use crate::domain::message::ChatMessage;

/// Request to `POST /image_generation/images`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageGenerationRequest {
    pub prompt_message: String,
}

/// Response from `POST /image_generation/images`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageGenerationResponse {
    pub output: ImageOutput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageOutput {
    /// URL of the generated image, hosted by the provider
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

/// Request to `POST /vision/images`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionRequest {
    pub image_url: String,
}

/// Response from `POST /vision/images`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionResponse {
    pub output: VisionOutput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionOutput {
    /// Caption produced by the vision model
    #[serde(rename = "imageComprehension")]
    pub image_comprehension: VisionComprehension,
}

/// Caption wrapper; clients read `output.imageComprehension.message.content`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionComprehension {
    pub message: ChatMessage,
}
