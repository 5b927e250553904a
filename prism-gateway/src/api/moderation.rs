//! Moderation API Handler

use axum::{Json, extract::State};

use prism_core::dto::moderation::{ModerationRequest, ModerationResponse};

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};

/// POST /moderation
/// Classify text against the provider's content policy
pub async fn moderation(
    State(state): State<AppState>,
    Json(req): Json<ModerationRequest>,
) -> ApiResult<Json<ModerationResponse>> {
    if req.input_message.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "input_message cannot be empty".to_string(),
        ));
    }

    tracing::debug!("Moderating input");

    let output = state.provider.moderate(&req.input_message).await?;

    Ok(Json(ModerationResponse { output }))
}
