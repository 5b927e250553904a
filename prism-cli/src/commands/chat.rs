//! Chat command handler

use anyhow::Result;
use colored::*;

use crate::api::GatewayClient;
use crate::config::Config;

/// Send a chat message and print the assistant's reply
pub async fn run(message: &str, config: &Config) -> Result<()> {
    let client = GatewayClient::new(&config.gateway_url);

    println!("{} {}", "User:".bold(), message);

    let reply = client.chat(message).await?;

    println!("{} {}", "Assistant:".bold().green(), reply.content);

    Ok(())
}
