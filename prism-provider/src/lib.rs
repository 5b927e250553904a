//! Prism Provider Client
//!
//! A type-safe HTTP client for an OpenAI-compatible generative-AI API.
//!
//! This crate provides the gateway's single point of contact with the
//! upstream provider: chat completions, image generation, vision captioning,
//! speech synthesis, transcription, embeddings, moderation, and the
//! assistant thread/run operations the run poller depends on.
//!
//! # Example
//!
//! ```no_run
//! use prism_provider::OpenAiClient;
//! use prism_core::domain::message::ChatMessage;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = OpenAiClient::new("https://api.openai.com", "sk-...");
//!
//!     let reply = client
//!         .chat_completion(vec![ChatMessage::user("howdy")])
//!         .await?;
//!
//!     println!("{}", reply.content);
//!     Ok(())
//! }
//! ```

mod audio;
mod chat;
mod embeddings;
pub mod error;
mod images;
mod moderation;
mod provider;
mod threads;

// Re-export commonly used types
pub use error::{ProviderError, Result};
pub use provider::AiProvider;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// Model identifiers used for each upstream capability
///
/// Every field has a working default; deployments override individual
/// entries through gateway configuration.
#[derive(Debug, Clone)]
pub struct Models {
    pub chat: String,
    pub image: String,
    pub vision: String,
    pub speech: String,
    pub speech_voice: String,
    pub transcription: String,
    pub embedding: String,
    pub moderation: String,
}

impl Default for Models {
    fn default() -> Self {
        Self {
            chat: "gpt-3.5-turbo".to_string(),
            image: "dall-e-3".to_string(),
            vision: "gpt-4o-mini".to_string(),
            speech: "tts-1".to_string(),
            speech_voice: "alloy".to_string(),
            transcription: "whisper-1".to_string(),
            embedding: "text-embedding-3-small".to_string(),
            moderation: "text-moderation-latest".to_string(),
        }
    }
}

/// HTTP client for an OpenAI-compatible provider API
///
/// Methods are organized into endpoint groups, one module per group:
/// - Chat completions and vision captioning
/// - Image generation
/// - Audio (speech synthesis, transcription)
/// - Embeddings and moderation
/// - Assistant threads and runs
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    /// Base URL of the provider (e.g., "https://api.openai.com")
    base_url: String,
    /// Bearer token sent with every request
    api_key: String,
    /// Model identifiers per capability
    models: Models,
    /// HTTP client instance
    client: Client,
}

impl OpenAiClient {
    /// Create a new provider client with default models
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(base_url, api_key, Models::default(), Client::new())
    }

    /// Create a new provider client with specific model identifiers
    pub fn with_models(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        models: Models,
    ) -> Self {
        Self::with_client(base_url, api_key, models, Client::new())
    }

    /// Create a new provider client with a custom HTTP client and models
    ///
    /// This allows configuring timeouts, proxies, TLS settings, and the
    /// model used for each capability.
    pub fn with_client(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        models: Models,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            models,
            client,
        }
    }

    /// Get the base URL of the provider
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the configured model identifiers
    pub fn models(&self) -> &Models {
        &self.models
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn bearer(&self) -> &str {
        &self.api_key
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the
    /// request failed, or deserializes the response body if successful.
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::api_error(status.as_u16(), error_text));
        }

        response.json().await.map_err(|e| {
            ProviderError::ParseError(format!("Failed to parse JSON response: {}", e))
        })
    }

    /// Handle an API response whose body is raw bytes (e.g., synthesized audio)
    pub(crate) async fn handle_binary_response(
        &self,
        response: reqwest::Response,
    ) -> Result<Vec<u8>> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::api_error(status.as_u16(), error_text));
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}
