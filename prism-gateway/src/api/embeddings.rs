//! Embeddings API Handler

use axum::{Json, extract::State};

use prism_core::dto::embeddings::{EmbeddingsOutput, EmbeddingsRequest, EmbeddingsResponse};

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};

/// POST /embeddings
/// Compute an embedding vector for the given text
pub async fn embeddings(
    State(state): State<AppState>,
    Json(req): Json<EmbeddingsRequest>,
) -> ApiResult<Json<EmbeddingsResponse>> {
    if req.input_text.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "input_text cannot be empty".to_string(),
        ));
    }

    tracing::debug!("Embedding {} character(s)", req.input_text.len());

    let embedding = state.provider.embed(&req.input_text).await?;

    Ok(Json(EmbeddingsResponse {
        output: EmbeddingsOutput { embedding },
    }))
}
