//! Audio command handlers
//!
//! Handles speech synthesis and transcription commands.

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use colored::*;

use crate::api::GatewayClient;
use crate::config::Config;

/// Synthesize speech and write the MP3 bytes to a file
pub async fn speak(text: &str, output: &str, config: &Config) -> Result<()> {
    let client = GatewayClient::new(&config.gateway_url);

    println!("{}", "Synthesizing speech...".yellow());

    let audio = client.speech(text).await?;

    tokio::fs::write(output, &audio)
        .await
        .with_context(|| format!("Failed to write {}", output))?;

    println!(
        "{} {} ({} bytes)",
        "Wrote".bold().green(),
        output,
        audio.len()
    );

    Ok(())
}

/// Transcribe an audio file to text
pub async fn transcribe(file: &str, config: &Config) -> Result<()> {
    let client = GatewayClient::new(&config.gateway_url);

    let audio = tokio::fs::read(file)
        .await
        .with_context(|| format!("Failed to read {}", file))?;

    let filename = std::path::Path::new(file)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("audio.mp3");

    println!("{}", "Transcribing...".yellow());

    let text = client.transcribe(BASE64.encode(&audio), filename).await?;

    println!("{} {}", "Transcript:".bold().green(), text);

    Ok(())
}
