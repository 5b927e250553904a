//! Chat completion envelopes

use serde::{Deserialize, Serialize};

use crate::domain::message::ChatMessage;

/// Request to `POST /text_generation/chat_completions`
///
/// `chats` is the full conversation history as held by the client; the
/// gateway prepends its configured system persona before forwarding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub chats: Vec<ChatMessage>,
}

/// Response from `POST /text_generation/chat_completions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    pub output: ChatMessage,
}
