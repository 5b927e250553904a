//! Chat completion and vision endpoints

use serde::{Deserialize, Serialize};

use crate::OpenAiClient;
use crate::error::{ProviderError, Result};
use prism_core::domain::message::ChatMessage;

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatCompletionWire {
    choices: Vec<ChoiceWire>,
}

#[derive(Debug, Deserialize)]
struct ChoiceWire {
    message: ChatMessage,
}

impl ChatCompletionWire {
    fn into_message(self) -> Result<ChatMessage> {
        self.choices
            .into_iter()
            .next()
            .map(|c| c.message)
            .ok_or(ProviderError::EmptyResponse("choices"))
    }
}

// Vision requests carry structured content parts instead of a plain string.

#[derive(Debug, Serialize)]
struct VisionBody<'a> {
    model: &'a str,
    messages: Vec<VisionMessageWire<'a>>,
}

#[derive(Debug, Serialize)]
struct VisionMessageWire<'a> {
    role: &'static str,
    content: Vec<ContentPartWire<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPartWire<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrlWire<'a> },
}

#[derive(Debug, Serialize)]
struct ImageUrlWire<'a> {
    url: &'a str,
}

impl OpenAiClient {
    /// Request a chat completion for the given conversation
    ///
    /// # Arguments
    /// * `messages` - Full conversation history, oldest first
    ///
    /// # Returns
    /// The assistant's reply message
    pub async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<ChatMessage> {
        let url = self.url("/v1/chat/completions");
        let body = ChatCompletionBody {
            model: &self.models().chat,
            messages: &messages,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.bearer())
            .json(&body)
            .send()
            .await?;

        let wire: ChatCompletionWire = self.handle_response(response).await?;
        wire.into_message()
    }

    /// Ask the vision model to describe an image by URL
    ///
    /// # Arguments
    /// * `image_url` - Publicly reachable URL of the image
    ///
    /// # Returns
    /// The model's caption message
    pub async fn describe_image(&self, image_url: &str) -> Result<ChatMessage> {
        let url = self.url("/v1/chat/completions");
        let body = VisionBody {
            model: &self.models().vision,
            messages: vec![VisionMessageWire {
                role: "user",
                content: vec![
                    ContentPartWire::Text {
                        text: "What is in this image?",
                    },
                    ContentPartWire::ImageUrl {
                        image_url: ImageUrlWire { url: image_url },
                    },
                ],
            }],
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.bearer())
            .json(&body)
            .send()
            .await?;

        let wire: ChatCompletionWire = self.handle_response(response).await?;
        wire.into_message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::domain::message::Role;

    #[test]
    fn test_parse_chat_completion_response() {
        let json = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Well howdy, partner."}}
            ]
        }"#;

        let wire: ChatCompletionWire = serde_json::from_str(json).unwrap();
        let message = wire.into_message().unwrap();
        assert_eq!(message.role, Role::Assistant);
        assert_eq!(message.content, "Well howdy, partner.");
    }

    #[test]
    fn test_empty_choices_is_an_error() {
        let wire: ChatCompletionWire = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(
            wire.into_message(),
            Err(ProviderError::EmptyResponse("choices"))
        ));
    }

    #[test]
    fn test_vision_body_shape() {
        let body = VisionBody {
            model: "gpt-4o-mini",
            messages: vec![VisionMessageWire {
                role: "user",
                content: vec![
                    ContentPartWire::Text { text: "describe" },
                    ContentPartWire::ImageUrl {
                        image_url: ImageUrlWire {
                            url: "https://example.com/a.png",
                        },
                    },
                ],
            }],
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["messages"][0]["content"][0]["type"], "text");
        assert_eq!(json["messages"][0]["content"][1]["type"], "image_url");
        assert_eq!(
            json["messages"][0]["content"][1]["image_url"]["url"],
            "https://example.com/a.png"
        );
    }
}
