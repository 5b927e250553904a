//! Audio API Handlers
//!
//! HTTP endpoints proxying speech synthesis and transcription.

use axum::{
    Json,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use prism_core::dto::audio::{SpeechRequest, TranscriptionOutput, TranscriptionRequest, TranscriptionResponse};

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};

/// POST /text_to_speech/speech
/// Synthesize speech; the response body is raw MP3 bytes
pub async fn speech(
    State(state): State<AppState>,
    Json(req): Json<SpeechRequest>,
) -> ApiResult<Response> {
    if req.input_message.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "input_message cannot be empty".to_string(),
        ));
    }

    tracing::debug!("Synthesizing speech");

    let audio = state.provider.speech(&req.input_message).await?;

    Ok(([(header::CONTENT_TYPE, "audio/mpeg")], audio).into_response())
}

/// POST /speech_to_text/transcriptions
/// Transcribe base64-encoded audio to text
pub async fn transcribe(
    State(state): State<AppState>,
    Json(req): Json<TranscriptionRequest>,
) -> ApiResult<Json<TranscriptionResponse>> {
    let audio = BASE64
        .decode(&req.audio_base64)
        .map_err(|e| ApiError::BadRequest(format!("audio_base64 is not valid base64: {}", e)))?;

    if audio.is_empty() {
        return Err(ApiError::BadRequest("audio payload is empty".to_string()));
    }

    tracing::debug!("Transcribing {} byte(s) of audio", audio.len());

    let text = state.provider.transcribe(audio, &req.filename).await?;

    Ok(Json(TranscriptionResponse {
        output: TranscriptionOutput { text },
    }))
}
