//! Assistant API Handler
//!
//! HTTP endpoint for the assistant thread messaging flow: append the
//! client's message to its thread, run the assistant, poll the run to a
//! terminal status, and reply with the thread's messages.

use axum::{Json, extract::State};

use prism_core::dto::assistant::{AssistantMessageRequest, AssistantMessageResponse};

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::poller::CancelToken;

/// POST /assistants/messages
/// Submit a message and wait for the assistant run to finish
///
/// The poll sequence is scoped to this request: its cancellation token and
/// timing state live in the handler future, so concurrent requests can
/// never observe or disturb each other's polling.
pub async fn assistant_message(
    State(state): State<AppState>,
    Json(req): Json<AssistantMessageRequest>,
) -> ApiResult<Json<AssistantMessageResponse>> {
    if req.thread_id.trim().is_empty() || req.assistant_id.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "thread_id and assistant_id are required".to_string(),
        ));
    }
    if req.input_message.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "input_message cannot be empty".to_string(),
        ));
    }

    tracing::info!(
        thread_id = %req.thread_id,
        assistant_id = %req.assistant_id,
        "Submitting assistant run"
    );

    let handle = state
        .poller
        .submit(&req.thread_id, &req.assistant_id, &req.input_message)
        .await?;

    let cancel = CancelToken::new();
    let messages = state.poller.await_completion(&handle, &cancel).await?;

    tracing::info!(
        thread_id = %handle.thread_id,
        run_id = %handle.run_id,
        "Run completed with {} message(s)",
        messages.len()
    );

    Ok(Json(AssistantMessageResponse { messages }))
}
