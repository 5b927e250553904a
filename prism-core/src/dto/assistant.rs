//! Assistant thread messaging envelopes

use serde::{Deserialize, Serialize};

use crate::domain::message::ThreadMessage;

/// Request to `POST /assistants/messages`
///
/// The thread and assistant must already exist on the provider side; the
/// gateway appends `input_message` to the thread, starts a run, and replies
/// once the run reaches a terminal status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantMessageRequest {
    pub thread_id: String,
    pub assistant_id: String,
    pub input_message: String,
}

/// Response from `POST /assistants/messages`
///
/// The full thread history, newest-first as the provider returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantMessageResponse {
    pub messages: Vec<ThreadMessage>,
}
