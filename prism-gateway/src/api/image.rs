//! Image API Handlers
//!
//! HTTP endpoints proxying image generation and vision captioning.

use axum::{Json, extract::State};

use prism_core::dto::image::{
    ImageGenerationRequest, ImageGenerationResponse, ImageOutput, VisionComprehension,
    VisionOutput, VisionRequest, VisionResponse,
};

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};

/// POST /image_generation/images
/// Generate an image from a prompt
pub async fn generate_image(
    State(state): State<AppState>,
    Json(req): Json<ImageGenerationRequest>,
) -> ApiResult<Json<ImageGenerationResponse>> {
    if req.prompt_message.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "prompt_message cannot be empty".to_string(),
        ));
    }

    tracing::debug!("Generating image");

    let image_url = state.provider.generate_image(&req.prompt_message).await?;

    Ok(Json(ImageGenerationResponse {
        output: ImageOutput { image_url },
    }))
}

/// POST /vision/images
/// Caption an image by URL
pub async fn describe_image(
    State(state): State<AppState>,
    Json(req): Json<VisionRequest>,
) -> ApiResult<Json<VisionResponse>> {
    if req.image_url.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "image_url cannot be empty".to_string(),
        ));
    }

    tracing::debug!("Captioning image: {}", req.image_url);

    let message = state.provider.describe_image(&req.image_url).await?;

    Ok(Json(VisionResponse {
        output: VisionOutput {
            image_comprehension: VisionComprehension { message },
        },
    }))
}
