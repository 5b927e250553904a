//! Assistant command handler
//!
//! Sends a message to an assistant thread and waits for the run to finish;
//! the gateway polls the run server-side, so this call blocks until the
//! assistant has replied or the gateway gives up.

use anyhow::Result;
use colored::*;

use prism_core::domain::message::Role;

use crate::api::GatewayClient;
use crate::config::Config;

/// Send a message to an assistant thread and print the conversation
pub async fn run(
    thread_id: &str,
    assistant_id: &str,
    message: &str,
    config: &Config,
) -> Result<()> {
    let client = GatewayClient::new(&config.gateway_url);

    println!("{}", "Waiting for the assistant run to complete...".yellow());

    let messages = client
        .assistant_message(thread_id, assistant_id, message)
        .await?;

    println!("{}", format!("Thread {} :", thread_id).bold());
    println!();

    // The gateway returns messages newest-first; print oldest-first
    for msg in messages.iter().rev() {
        let label = match msg.role {
            Role::Assistant => "Assistant:".bold().green(),
            Role::User => "User:".bold(),
            Role::System => "System:".bold().blue(),
        };
        println!("{} {}", label, msg.content);
    }

    Ok(())
}
