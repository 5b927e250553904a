//! API client module
//!
//! HTTP client for communicating with the Prism gateway API.

use anyhow::{Context, Result, bail};
use reqwest::Client;
use serde::de::DeserializeOwned;

use prism_core::domain::message::{ChatMessage, ThreadMessage};
use prism_core::domain::moderation::ModerationVerdict;
use prism_core::dto::assistant::{AssistantMessageRequest, AssistantMessageResponse};
use prism_core::dto::audio::{SpeechRequest, TranscriptionRequest, TranscriptionResponse};
use prism_core::dto::chat::{ChatCompletionRequest, ChatCompletionResponse};
use prism_core::dto::embeddings::{EmbeddingsRequest, EmbeddingsResponse};
use prism_core::dto::image::{
    ImageGenerationRequest, ImageGenerationResponse, VisionRequest, VisionResponse,
};
use prism_core::dto::moderation::{ModerationRequest, ModerationResponse};

/// HTTP client for the Prism gateway API
pub struct GatewayClient {
    base_url: String,
    client: Client,
}

impl GatewayClient {
    /// Create a new gateway client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the gateway API
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Complete a single-message chat
    pub async fn chat(&self, message: &str) -> Result<ChatMessage> {
        let url = format!("{}/text_generation/chat_completions", self.base_url);
        let req = ChatCompletionRequest {
            chats: vec![ChatMessage::user(message)],
        };

        let response = self
            .client
            .post(&url)
            .json(&req)
            .send()
            .await
            .context("Failed to send chat request")?;

        let parsed: ChatCompletionResponse = self.handle_response(response).await?;
        Ok(parsed.output)
    }

    /// Generate an image, returning its URL
    pub async fn generate_image(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/image_generation/images", self.base_url);
        let req = ImageGenerationRequest {
            prompt_message: prompt.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&req)
            .send()
            .await
            .context("Failed to send image generation request")?;

        let parsed: ImageGenerationResponse = self.handle_response(response).await?;
        Ok(parsed.output.image_url)
    }

    /// Caption an image by URL
    pub async fn describe_image(&self, image_url: &str) -> Result<ChatMessage> {
        let url = format!("{}/vision/images", self.base_url);
        let req = VisionRequest {
            image_url: image_url.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&req)
            .send()
            .await
            .context("Failed to send vision request")?;

        let parsed: VisionResponse = self.handle_response(response).await?;
        Ok(parsed.output.image_comprehension.message)
    }

    /// Synthesize speech, returning raw MP3 bytes
    pub async fn speech(&self, text: &str) -> Result<Vec<u8>> {
        let url = format!("{}/text_to_speech/speech", self.base_url);
        let req = SpeechRequest {
            input_message: text.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&req)
            .send()
            .await
            .context("Failed to send speech request")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            bail!("Gateway error (status {}): {}", status.as_u16(), error_text);
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read audio body")?;
        Ok(bytes.to_vec())
    }

    /// Transcribe base64-encoded audio
    pub async fn transcribe(&self, audio_base64: String, filename: &str) -> Result<String> {
        let url = format!("{}/speech_to_text/transcriptions", self.base_url);
        let req = TranscriptionRequest {
            audio_base64,
            filename: filename.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&req)
            .send()
            .await
            .context("Failed to send transcription request")?;

        let parsed: TranscriptionResponse = self.handle_response(response).await?;
        Ok(parsed.output.text)
    }

    /// Compute an embedding vector
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let url = format!("{}/embeddings", self.base_url);
        let req = EmbeddingsRequest {
            input_text: text.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&req)
            .send()
            .await
            .context("Failed to send embeddings request")?;

        let parsed: EmbeddingsResponse = self.handle_response(response).await?;
        Ok(parsed.output.embedding)
    }

    /// Moderate text
    pub async fn moderate(&self, text: &str) -> Result<ModerationVerdict> {
        let url = format!("{}/moderation", self.base_url);
        let req = ModerationRequest {
            input_message: text.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&req)
            .send()
            .await
            .context("Failed to send moderation request")?;

        let parsed: ModerationResponse = self.handle_response(response).await?;
        Ok(parsed.output)
    }

    /// Send a message to an assistant thread and wait for the run to finish
    pub async fn assistant_message(
        &self,
        thread_id: &str,
        assistant_id: &str,
        message: &str,
    ) -> Result<Vec<ThreadMessage>> {
        let url = format!("{}/assistants/messages", self.base_url);
        let req = AssistantMessageRequest {
            thread_id: thread_id.to_string(),
            assistant_id: assistant_id.to_string(),
            input_message: message.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&req)
            .send()
            .await
            .context("Failed to send assistant request")?;

        let parsed: AssistantMessageResponse = self.handle_response(response).await?;
        Ok(parsed.messages)
    }

    /// Handle an API response and deserialize JSON
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            bail!("Gateway error (status {}): {}", status.as_u16(), error_text);
        }

        response
            .json()
            .await
            .context("Failed to parse gateway response")
    }
}
