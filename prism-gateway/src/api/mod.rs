//! API Module
//!
//! HTTP API layer for the gateway.
//! Each submodule handles endpoints for one provider capability.

pub mod assistant;
pub mod audio;
pub mod chat;
pub mod embeddings;
pub mod error;
pub mod health;
pub mod image;
pub mod moderation;

use std::sync::Arc;

use axum::{Router, routing::get, routing::post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use prism_provider::AiProvider;

use crate::poller::{PollConfig, RunPoller};

/// Shared state for all API handlers
#[derive(Clone)]
pub struct AppState {
    /// Upstream provider the routes proxy to
    pub provider: Arc<dyn AiProvider>,
    /// Poller driving assistant runs to completion
    pub poller: RunPoller,
    /// System persona prepended to chat completions
    pub system_prompt: String,
}

impl AppState {
    /// Creates application state around a provider
    pub fn new(provider: Arc<dyn AiProvider>, poll: PollConfig, system_prompt: String) -> Self {
        let poller = RunPoller::new(Arc::clone(&provider), poll);
        Self {
            provider,
            poller,
            system_prompt,
        }
    }
}

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // One-shot proxy endpoints
        .route(
            "/text_generation/chat_completions",
            post(chat::chat_completions),
        )
        .route("/image_generation/images", post(image::generate_image))
        .route("/vision/images", post(image::describe_image))
        .route("/text_to_speech/speech", post(audio::speech))
        .route("/speech_to_text/transcriptions", post(audio::transcribe))
        .route("/embeddings", post(embeddings::embeddings))
        .route("/moderation", post(moderation::moderation))
        // Assistant thread messaging
        .route("/assistants/messages", post(assistant::assistant_message))
        // Add state and middleware; the browser form client is served from
        // another origin, so CORS stays permissive
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
