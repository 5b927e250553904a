//! Prism Gateway
//!
//! HTTP gateway that proxies browser and CLI requests to an
//! OpenAI-compatible generative-AI API: chat, image generation, vision
//! captioning, speech, transcription, embeddings, moderation, and the
//! assistant thread messaging flow.
//!
//! Architecture:
//! - Configuration: environment-driven settings with validation
//! - API: one axum handler module per provider capability
//! - Poller: drives assistant runs to a terminal status per request

pub mod api;
pub mod config;
pub mod poller;
#[cfg(test)]
mod test_support;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prism_provider::OpenAiClient;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prism_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Prism Gateway...");

    // Load and validate configuration
    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        "Provider: {} (poll interval {:?})",
        config.provider_url,
        config.poll.interval
    );

    // Initialize provider client
    let client =
        OpenAiClient::with_models(&config.provider_url, &config.api_key, config.models.clone());

    let state = api::AppState::new(
        Arc::new(client),
        config.poll.clone(),
        config.system_prompt.clone(),
    );

    // Build router with all API endpoints
    let app = api::create_router(state);

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
