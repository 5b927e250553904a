//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod assistant;
mod audio;
mod chat;
mod embeddings;
mod image;
mod moderation;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Send a chat message and print the reply
    Chat {
        /// Message text
        message: String,
    },
    /// Generate an image from a prompt
    Image {
        /// Prompt describing the image
        prompt: String,
    },
    /// Caption an image by URL
    Vision {
        /// URL of the image to describe
        image_url: String,
    },
    /// Synthesize speech and write it to a file
    Speak {
        /// Text to read aloud
        text: String,

        /// Output path for the MP3 file
        #[arg(short, long, default_value = "speech.mp3")]
        output: String,
    },
    /// Transcribe an audio file to text
    Transcribe {
        /// Path to the audio file
        file: String,
    },
    /// Compute an embedding vector for text
    Embed {
        /// Text to embed
        text: String,
    },
    /// Moderate text against the provider's content policy
    Moderate {
        /// Text to classify
        text: String,
    },
    /// Send a message to an assistant thread and wait for the reply
    Assistant {
        /// Thread ID
        #[arg(long)]
        thread_id: String,

        /// Assistant ID
        #[arg(long)]
        assistant_id: String,

        /// Message text
        message: String,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Chat { message } => chat::run(&message, config).await,
        Commands::Image { prompt } => image::generate(&prompt, config).await,
        Commands::Vision { image_url } => image::describe(&image_url, config).await,
        Commands::Speak { text, output } => audio::speak(&text, &output, config).await,
        Commands::Transcribe { file } => audio::transcribe(&file, config).await,
        Commands::Embed { text } => embeddings::run(&text, config).await,
        Commands::Moderate { text } => moderation::run(&text, config).await,
        Commands::Assistant {
            thread_id,
            assistant_id,
            message,
        } => assistant::run(&thread_id, &assistant_id, &message, config).await,
    }
}
