//! Text-to-speech and speech-to-text envelopes

use serde::{Deserialize, Serialize};

/// Request to `POST /text_to_speech/speech`
///
/// The response is raw `audio/mpeg` bytes, not JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechRequest {
    pub input_message: String,
}

/// Request to `POST /speech_to_text/transcriptions`
///
/// Audio is carried base64-encoded so the route stays a plain JSON POST;
/// `filename` lets the provider infer the container format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionRequest {
    pub audio_base64: String,
    pub filename: String,
}

/// Response from `POST /speech_to_text/transcriptions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    pub output: TranscriptionOutput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionOutput {
    pub text: String,
}
