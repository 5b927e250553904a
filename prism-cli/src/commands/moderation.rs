//! Moderation command handler

use anyhow::Result;
use colored::*;

use crate::api::GatewayClient;
use crate::config::Config;

/// Moderate text and print the verdict
pub async fn run(text: &str, config: &Config) -> Result<()> {
    let client = GatewayClient::new(&config.gateway_url);

    let verdict = client.moderate(text).await?;

    if verdict.flagged {
        println!(
            "{} {}",
            "Flagged:".bold().red(),
            verdict.categories.join(", ")
        );
    } else {
        println!("{}", "Not flagged.".green());
    }

    Ok(())
}
