//! Gateway configuration
//!
//! Defines all configurable parameters for the gateway including the
//! upstream provider connection, per-capability model names, the chat
//! persona, and the run poller's timing knobs.

use std::time::Duration;

use prism_provider::Models;

use crate::poller::PollConfig;

/// Gateway configuration
///
/// Poller timings are configurable so deployments can tune the pressure
/// put on the rate-limited upstream API (fixed 2.5s polling is only a
/// default, not a policy).
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind_addr: String,

    /// Upstream provider base URL (e.g., "https://api.openai.com")
    pub provider_url: String,

    /// Bearer token for the upstream provider
    pub api_key: String,

    /// Model identifiers per capability
    pub models: Models,

    /// System persona prepended to every chat completion
    pub system_prompt: String,

    /// Run poller timing knobs
    pub poll: PollConfig,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(api_key: String) -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            provider_url: "https://api.openai.com".to_string(),
            api_key,
            models: Models::default(),
            system_prompt: "You are a texas cowboy.".to_string(),
            poll: PollConfig {
                // Bound the default poll sequence instead of polling forever
                max_attempts: Some(120),
                timeout: Some(Duration::from_secs(300)),
                ..PollConfig::default()
            },
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - OPENAI_API_KEY (required)
    /// - OPENAI_BASE_URL (optional, default: "https://api.openai.com")
    /// - PRISM_BIND_ADDR (optional, default: "0.0.0.0:8080")
    /// - CHAT_SYSTEM_PROMPT (optional)
    /// - CHAT_MODEL / IMAGE_MODEL / VISION_MODEL / SPEECH_MODEL /
    ///   SPEECH_VOICE / TRANSCRIPTION_MODEL / EMBEDDING_MODEL /
    ///   MODERATION_MODEL (optional)
    /// - POLL_INTERVAL_MS (optional, default: 2500)
    /// - POLL_BACKOFF_MULTIPLIER (optional, default: 1.0)
    /// - POLL_MAX_INTERVAL_MS (optional, default: 60000)
    /// - POLL_MAX_ATTEMPTS (optional, default: 120)
    /// - POLL_TIMEOUT_SECS (optional, default: 300)
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| anyhow::anyhow!("OPENAI_API_KEY environment variable not set"))?;

        let mut config = Self::new(api_key);

        if let Ok(url) = std::env::var("OPENAI_BASE_URL") {
            config.provider_url = url;
        }
        if let Ok(addr) = std::env::var("PRISM_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(prompt) = std::env::var("CHAT_SYSTEM_PROMPT") {
            config.system_prompt = prompt;
        }

        let model_overrides: [(&str, &mut String); 8] = [
            ("CHAT_MODEL", &mut config.models.chat),
            ("IMAGE_MODEL", &mut config.models.image),
            ("VISION_MODEL", &mut config.models.vision),
            ("SPEECH_MODEL", &mut config.models.speech),
            ("SPEECH_VOICE", &mut config.models.speech_voice),
            ("TRANSCRIPTION_MODEL", &mut config.models.transcription),
            ("EMBEDDING_MODEL", &mut config.models.embedding),
            ("MODERATION_MODEL", &mut config.models.moderation),
        ];
        for (var, slot) in model_overrides {
            if let Ok(value) = std::env::var(var) {
                *slot = value;
            }
        }

        if let Some(ms) = read_env_u64("POLL_INTERVAL_MS") {
            config.poll.interval = Duration::from_millis(ms);
        }
        if let Ok(raw) = std::env::var("POLL_BACKOFF_MULTIPLIER")
            && let Ok(multiplier) = raw.parse::<f64>()
        {
            config.poll.backoff_multiplier = multiplier;
        }
        if let Some(ms) = read_env_u64("POLL_MAX_INTERVAL_MS") {
            config.poll.max_interval = Duration::from_millis(ms);
        }
        if let Some(n) = read_env_u64("POLL_MAX_ATTEMPTS") {
            config.poll.max_attempts = Some(n as u32);
        }
        if let Some(secs) = read_env_u64("POLL_TIMEOUT_SECS") {
            config.poll.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bind_addr.is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        if self.api_key.is_empty() {
            anyhow::bail!("api_key cannot be empty");
        }

        if !self.provider_url.starts_with("http://") && !self.provider_url.starts_with("https://") {
            anyhow::bail!("provider_url must start with http:// or https://");
        }

        if self.poll.interval.is_zero() {
            anyhow::bail!("poll interval must be greater than 0");
        }

        // Written as a negated >= so NaN (for which every comparison is
        // false) is rejected rather than slipping through a < check
        if !(self.poll.backoff_multiplier >= 1.0) || !self.poll.backoff_multiplier.is_finite() {
            anyhow::bail!("poll backoff multiplier must be a finite number of at least 1.0");
        }

        if self.poll.max_interval < self.poll.interval {
            anyhow::bail!("poll max interval must be at least the base interval");
        }

        Ok(())
    }
}

fn read_env_u64(var: &str) -> Option<u64> {
    std::env::var(var).ok().and_then(|s| s.parse::<u64>().ok())
}
