//! Moderation endpoint

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::OpenAiClient;
use crate::error::{ProviderError, Result};
use prism_core::domain::moderation::ModerationVerdict;

#[derive(Debug, Serialize)]
struct ModerationBody<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct ModerationWire {
    results: Vec<ModerationResultWire>,
}

#[derive(Debug, Deserialize)]
struct ModerationResultWire {
    flagged: bool,
    // BTreeMap keeps flagged category names in a stable order
    categories: BTreeMap<String, bool>,
}

impl ModerationResultWire {
    fn into_verdict(self) -> ModerationVerdict {
        let categories = self
            .categories
            .into_iter()
            .filter(|(_, flagged)| *flagged)
            .map(|(name, _)| name)
            .collect();

        ModerationVerdict {
            flagged: self.flagged,
            categories,
        }
    }
}

impl OpenAiClient {
    /// Classify text against the provider's content policy
    pub async fn moderate(&self, input: &str) -> Result<ModerationVerdict> {
        let url = self.url("/v1/moderations");
        let body = ModerationBody {
            model: &self.models().moderation,
            input,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.bearer())
            .json(&body)
            .send()
            .await?;

        let wire: ModerationWire = self.handle_response(response).await?;
        wire.results
            .into_iter()
            .next()
            .map(ModerationResultWire::into_verdict)
            .ok_or(ProviderError::EmptyResponse("moderation results"))
    }
}
