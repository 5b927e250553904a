//! Prism CLI
//!
//! Command-line client for the Prism gateway, covering every proxy route:
//! chat, image generation, vision, speech, transcription, embeddings,
//! moderation, and the assistant thread messaging flow.

mod api;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;

#[derive(Parser)]
#[command(name = "prism")]
#[command(about = "Prism AI gateway CLI", long_about = None)]
struct Cli {
    /// Gateway URL
    #[arg(
        long,
        env = "PRISM_GATEWAY_URL",
        default_value = "http://localhost:8080"
    )]
    gateway_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        gateway_url: cli.gateway_url,
    };

    handle_command(cli.command, &config).await
}
