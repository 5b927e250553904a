//! Chat API Handlers
//!
//! HTTP endpoint proxying chat completions to the provider.

use axum::{Json, extract::State};

use prism_core::domain::message::ChatMessage;
use prism_core::dto::chat::{ChatCompletionRequest, ChatCompletionResponse};

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};

/// POST /text_generation/chat_completions
/// Complete the client's conversation with the configured persona prepended
pub async fn chat_completions(
    State(state): State<AppState>,
    Json(req): Json<ChatCompletionRequest>,
) -> ApiResult<Json<ChatCompletionResponse>> {
    if req.chats.is_empty() {
        return Err(ApiError::BadRequest("chats cannot be empty".to_string()));
    }

    tracing::debug!("Completing chat with {} message(s)", req.chats.len());

    let mut messages = Vec::with_capacity(req.chats.len() + 1);
    messages.push(ChatMessage::system(&state.system_prompt));
    messages.extend(req.chats);

    let output = state.provider.chat_completion(messages).await?;

    Ok(Json(ChatCompletionResponse { output }))
}
