//! Provider abstraction
//!
//! The gateway and the run poller depend on this trait rather than on
//! [`OpenAiClient`] directly, so tests can substitute a scripted fake and
//! the upstream vendor can be swapped without touching route handlers.

use async_trait::async_trait;

use crate::OpenAiClient;
use crate::error::Result;
use prism_core::domain::message::{ChatMessage, Role, ThreadMessage};
use prism_core::domain::moderation::ModerationVerdict;
use prism_core::domain::run::{RunHandle, RunStatus};

/// Operations offered by a generative-AI provider
///
/// The thread/run quartet (`create_message`, `create_run`, `get_run_status`,
/// `list_messages`) is the status oracle the run poller drives; the rest are
/// the one-shot capabilities the gateway proxies directly.
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Request a chat completion for the given conversation
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<ChatMessage>;

    /// Generate an image from a text prompt, returning its URL
    async fn generate_image(&self, prompt: &str) -> Result<String>;

    /// Caption an image by URL
    async fn describe_image(&self, image_url: &str) -> Result<ChatMessage>;

    /// Synthesize speech, returning raw MP3 bytes
    async fn speech(&self, input: &str) -> Result<Vec<u8>>;

    /// Transcribe recorded audio to text
    async fn transcribe(&self, audio: Vec<u8>, filename: &str) -> Result<String>;

    /// Compute an embedding vector for the given text
    async fn embed(&self, input: &str) -> Result<Vec<f32>>;

    /// Classify text against the provider's content policy
    async fn moderate(&self, input: &str) -> Result<ModerationVerdict>;

    /// Append a message to a conversation thread
    async fn create_message(
        &self,
        thread_id: &str,
        role: Role,
        content: &str,
    ) -> Result<ThreadMessage>;

    /// Start a run of an assistant against a thread
    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<RunHandle>;

    /// Query the current status of a run
    async fn get_run_status(&self, thread_id: &str, run_id: &str) -> Result<RunStatus>;

    /// List all messages on a thread, newest first
    async fn list_messages(&self, thread_id: &str) -> Result<Vec<ThreadMessage>>;
}

#[async_trait]
impl AiProvider for OpenAiClient {
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<ChatMessage> {
        OpenAiClient::chat_completion(self, messages).await
    }

    async fn generate_image(&self, prompt: &str) -> Result<String> {
        OpenAiClient::generate_image(self, prompt).await
    }

    async fn describe_image(&self, image_url: &str) -> Result<ChatMessage> {
        OpenAiClient::describe_image(self, image_url).await
    }

    async fn speech(&self, input: &str) -> Result<Vec<u8>> {
        OpenAiClient::speech(self, input).await
    }

    async fn transcribe(&self, audio: Vec<u8>, filename: &str) -> Result<String> {
        OpenAiClient::transcribe(self, audio, filename).await
    }

    async fn embed(&self, input: &str) -> Result<Vec<f32>> {
        OpenAiClient::embed(self, input).await
    }

    async fn moderate(&self, input: &str) -> Result<ModerationVerdict> {
        OpenAiClient::moderate(self, input).await
    }

    async fn create_message(
        &self,
        thread_id: &str,
        role: Role,
        content: &str,
    ) -> Result<ThreadMessage> {
        OpenAiClient::create_message(self, thread_id, role, content).await
    }

    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<RunHandle> {
        OpenAiClient::create_run(self, thread_id, assistant_id).await
    }

    async fn get_run_status(&self, thread_id: &str, run_id: &str) -> Result<RunStatus> {
        OpenAiClient::get_run_status(self, thread_id, run_id).await
    }

    async fn list_messages(&self, thread_id: &str) -> Result<Vec<ThreadMessage>> {
        OpenAiClient::list_messages(self, thread_id).await
    }
}
