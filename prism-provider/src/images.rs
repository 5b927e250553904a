//! Image generation endpoint

use serde::{Deserialize, Serialize};

use crate::OpenAiClient;
use crate::error::{ProviderError, Result};

#[derive(Debug, Serialize)]
struct ImageGenerationBody<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u8,
    size: &'a str,
}

#[derive(Debug, Deserialize)]
struct ImageGenerationWire {
    data: Vec<ImageWire>,
}

#[derive(Debug, Deserialize)]
struct ImageWire {
    url: String,
}

impl OpenAiClient {
    /// Generate an image from a text prompt
    ///
    /// # Arguments
    /// * `prompt` - Natural-language description of the desired image
    ///
    /// # Returns
    /// URL of the generated image, hosted by the provider
    pub async fn generate_image(&self, prompt: &str) -> Result<String> {
        let url = self.url("/v1/images/generations");
        let body = ImageGenerationBody {
            model: &self.models().image,
            prompt,
            n: 1,
            size: "1024x1024",
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.bearer())
            .json(&body)
            .send()
            .await?;

        let wire: ImageGenerationWire = self.handle_response(response).await?;
        wire.data
            .into_iter()
            .next()
            .map(|img| img.url)
            .ok_or(ProviderError::EmptyResponse("image data"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_image_response() {
        let json = r#"{"created": 1700000000, "data": [{"url": "https://img.example.com/1.png"}]}"#;
        let wire: ImageGenerationWire = serde_json::from_str(json).unwrap();
        assert_eq!(wire.data[0].url, "https://img.example.com/1.png");
    }
}
