//! Assistant thread and run endpoints
//!
//! These four operations are the status oracle the run poller drives:
//! append a message, start a run, query run status, list messages.
//! All of them require the `OpenAI-Beta: assistants=v2` header.

use serde::{Deserialize, Serialize};

use crate::OpenAiClient;
use crate::error::Result;
use prism_core::domain::message::{Role, ThreadMessage};
use prism_core::domain::run::{RunHandle, RunStatus};

const ASSISTANTS_BETA: (&str, &str) = ("OpenAI-Beta", "assistants=v2");

#[derive(Debug, Serialize)]
struct CreateMessageBody<'a> {
    role: Role,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct CreateRunBody<'a> {
    assistant_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct RunWire {
    id: String,
    thread_id: String,
}

#[derive(Debug, Deserialize)]
struct RunStatusWire {
    status: RunStatus,
}

#[derive(Debug, Deserialize)]
struct MessageListWire {
    data: Vec<ThreadMessageWire>,
}

#[derive(Debug, Deserialize)]
struct ThreadMessageWire {
    id: String,
    role: Role,
    content: Vec<MessageContentWire>,
    /// Unix timestamp in seconds
    created_at: i64,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum MessageContentWire {
    Text { text: TextContentWire },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Deserialize)]
struct TextContentWire {
    value: String,
}

impl ThreadMessageWire {
    /// Flattens the provider's content parts into plain text, skipping
    /// non-text parts (images, files)
    fn into_message(self) -> ThreadMessage {
        let content = self
            .content
            .into_iter()
            .filter_map(|part| match part {
                MessageContentWire::Text { text } => Some(text.value),
                MessageContentWire::Unsupported => None,
            })
            .collect::<Vec<_>>()
            .join("\n");

        ThreadMessage {
            id: self.id,
            role: self.role,
            content,
            created_at: chrono::DateTime::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}

impl OpenAiClient {
    /// Append a message to a conversation thread
    ///
    /// # Arguments
    /// * `thread_id` - The provider-issued thread id
    /// * `role` - Author role, normally [`Role::User`]
    /// * `content` - Message text
    ///
    /// # Returns
    /// The stored message
    pub async fn create_message(
        &self,
        thread_id: &str,
        role: Role,
        content: &str,
    ) -> Result<ThreadMessage> {
        let url = self.url(&format!("/v1/threads/{}/messages", thread_id));
        let body = CreateMessageBody { role, content };

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.bearer())
            .header(ASSISTANTS_BETA.0, ASSISTANTS_BETA.1)
            .json(&body)
            .send()
            .await?;

        let wire: ThreadMessageWire = self.handle_response(response).await?;
        Ok(wire.into_message())
    }

    /// Start a run of an assistant against a thread
    ///
    /// # Arguments
    /// * `thread_id` - The thread to run against
    /// * `assistant_id` - The assistant to execute
    ///
    /// # Returns
    /// A handle identifying the pending run
    pub async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<RunHandle> {
        let url = self.url(&format!("/v1/threads/{}/runs", thread_id));
        let body = CreateRunBody { assistant_id };

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.bearer())
            .header(ASSISTANTS_BETA.0, ASSISTANTS_BETA.1)
            .json(&body)
            .send()
            .await?;

        let wire: RunWire = self.handle_response(response).await?;
        Ok(RunHandle::new(wire.thread_id, wire.id))
    }

    /// Query the current status of a run
    pub async fn get_run_status(&self, thread_id: &str, run_id: &str) -> Result<RunStatus> {
        let url = self.url(&format!("/v1/threads/{}/runs/{}", thread_id, run_id));

        let response = self
            .client
            .get(&url)
            .bearer_auth(self.bearer())
            .header(ASSISTANTS_BETA.0, ASSISTANTS_BETA.1)
            .send()
            .await?;

        let wire: RunStatusWire = self.handle_response(response).await?;
        Ok(wire.status)
    }

    /// List all messages on a thread, newest first
    pub async fn list_messages(&self, thread_id: &str) -> Result<Vec<ThreadMessage>> {
        let url = self.url(&format!("/v1/threads/{}/messages", thread_id));

        let response = self
            .client
            .get(&url)
            .bearer_auth(self.bearer())
            .header(ASSISTANTS_BETA.0, ASSISTANTS_BETA.1)
            .send()
            .await?;

        let wire: MessageListWire = self.handle_response(response).await?;
        Ok(wire
            .data
            .into_iter()
            .map(ThreadMessageWire::into_message)
            .collect())
    }
}
