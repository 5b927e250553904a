//! Embeddings endpoint

use serde::{Deserialize, Serialize};

use crate::OpenAiClient;
use crate::error::{ProviderError, Result};

#[derive(Debug, Serialize)]
struct EmbeddingsBody<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingsWire {
    data: Vec<EmbeddingWire>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingWire {
    embedding: Vec<f32>,
}

impl OpenAiClient {
    /// Compute an embedding vector for the given text
    pub async fn embed(&self, input: &str) -> Result<Vec<f32>> {
        let url = self.url("/v1/embeddings");
        let body = EmbeddingsBody {
            model: &self.models().embedding,
            input,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.bearer())
            .json(&body)
            .send()
            .await?;

        let wire: EmbeddingsWire = self.handle_response(response).await?;
        wire.data
            .into_iter()
            .next()
            .map(|e| e.embedding)
            .ok_or(ProviderError::EmptyResponse("embedding data"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_embeddings_response() {
        let json = r#"{"data": [{"index": 0, "embedding": [0.1, -0.2, 0.3]}]}"#;
        let wire: EmbeddingsWire = serde_json::from_str(json).unwrap();
        assert_eq!(wire.data[0].embedding, vec![0.1, -0.2, 0.3]);
    }
}
