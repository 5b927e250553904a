//! Image command handlers
//!
//! Handles image generation and vision captioning commands.

use anyhow::Result;
use colored::*;

use crate::api::GatewayClient;
use crate::config::Config;

/// Generate an image and print its URL
pub async fn generate(prompt: &str, config: &Config) -> Result<()> {
    let client = GatewayClient::new(&config.gateway_url);

    println!("{}", "Generating image...".yellow());

    let url = client.generate_image(prompt).await?;

    println!("{} {}", "Image URL:".bold().green(), url);

    Ok(())
}

/// Caption an image by URL
pub async fn describe(image_url: &str, config: &Config) -> Result<()> {
    let client = GatewayClient::new(&config.gateway_url);

    println!("{}", "Analyzing image...".yellow());

    let caption = client.describe_image(image_url).await?;

    println!("{} {}", "Caption:".bold().green(), caption.content);

    Ok(())
}
