//! Audio endpoints: speech synthesis and transcription

use reqwest::multipart;
use serde::{Deserialize, Serialize};

use crate::OpenAiClient;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct SpeechBody<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranscriptionWire {
    text: String,
}

impl OpenAiClient {
    /// Synthesize speech from text
    ///
    /// # Arguments
    /// * `input` - Text to read aloud
    ///
    /// # Returns
    /// Raw MP3 bytes
    pub async fn speech(&self, input: &str) -> Result<Vec<u8>> {
        let url = self.url("/v1/audio/speech");
        let body = SpeechBody {
            model: &self.models().speech,
            input,
            voice: &self.models().speech_voice,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.bearer())
            .json(&body)
            .send()
            .await?;

        self.handle_binary_response(response).await
    }

    /// Transcribe recorded audio to text
    ///
    /// # Arguments
    /// * `audio` - Encoded audio bytes (mp3, wav, webm, ...)
    /// * `filename` - Original filename; the provider infers the container
    ///   format from its extension
    ///
    /// # Returns
    /// The transcribed text
    pub async fn transcribe(&self, audio: Vec<u8>, filename: &str) -> Result<String> {
        let url = self.url("/v1/audio/transcriptions");

        let file_part = multipart::Part::bytes(audio).file_name(filename.to_string());
        let form = multipart::Form::new()
            .part("file", file_part)
            .text("model", self.models().transcription.clone());

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.bearer())
            .multipart(form)
            .send()
            .await?;

        let wire: TranscriptionWire = self.handle_response(response).await?;
        Ok(wire.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_transcription_response() {
        let wire: TranscriptionWire =
            serde_json::from_str(r#"{"text": "howdy there"}"#).unwrap();
        assert_eq!(wire.text, "howdy there");
    }

    #[test]
    fn test_speech_body_shape() {
        let body = SpeechBody {
            model: "tts-1",
            input: "howdy",
            voice: "alloy",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "tts-1");
        assert_eq!(json["voice"], "alloy");
    }
}
