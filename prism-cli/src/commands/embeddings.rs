//! Embeddings command handler

use anyhow::Result;
use colored::*;

use crate::api::GatewayClient;
use crate::config::Config;

/// Compute and summarize an embedding vector
pub async fn run(text: &str, config: &Config) -> Result<()> {
    let client = GatewayClient::new(&config.gateway_url);

    let embedding = client.embed(text).await?;

    println!(
        "{} {} dimension(s)",
        "Embedding:".bold().green(),
        embedding.len()
    );

    // Print a short prefix; full vectors are noise on a terminal
    let preview: Vec<String> = embedding.iter().take(8).map(|v| format!("{:.4}", v)).collect();
    println!("[{}, ...]", preview.join(", "));

    Ok(())
}
