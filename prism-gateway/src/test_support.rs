//! Scripted fake provider for gateway and poller tests

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use prism_core::domain::message::{ChatMessage, Role, ThreadMessage};
use prism_core::domain::moderation::ModerationVerdict;
use prism_core::domain::run::{RunHandle, RunStatus};
use prism_provider::{AiProvider, ProviderError, Result};

/// In-memory provider with per-run scripted status sequences
///
/// `get_run_status` pops the next scripted status for the queried run; once
/// a script is exhausted the run answers `InProgress` forever, which is how
/// timeout tests model a run that never finishes.
#[derive(Default)]
pub struct MockProvider {
    scripts: Mutex<HashMap<String, VecDeque<RunStatus>>>,
    queries: Mutex<HashMap<String, u32>>,
    create_message_calls: AtomicU32,
    create_run_calls: AtomicU32,
    list_messages_calls: AtomicU32,
    fail_create_message: bool,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `create_message` reject every call
    pub fn failing_create_message(mut self) -> Self {
        self.fail_create_message = true;
        self
    }

    /// Scripts the status sequence a run reports, in order
    pub fn script_run(&self, run_id: &str, statuses: Vec<RunStatus>) {
        self.scripts
            .lock()
            .unwrap()
            .insert(run_id.to_string(), statuses.into());
    }

    /// Number of status queries issued for the given run
    pub fn status_queries(&self, run_id: &str) -> u32 {
        self.queries
            .lock()
            .unwrap()
            .get(run_id)
            .copied()
            .unwrap_or(0)
    }

    pub fn create_run_calls(&self) -> u32 {
        self.create_run_calls.load(Ordering::SeqCst)
    }

    pub fn list_messages_calls(&self) -> u32 {
        self.list_messages_calls.load(Ordering::SeqCst)
    }

    fn reply(content: &str) -> ThreadMessage {
        ThreadMessage {
            id: format!("msg_{}", uuid::Uuid::new_v4()),
            role: Role::Assistant,
            content: content.to_string(),
            created_at: chrono::Utc::now(),
        }
    }
}

#[async_trait]
impl AiProvider for MockProvider {
    async fn chat_completion(&self, _messages: Vec<ChatMessage>) -> Result<ChatMessage> {
        Ok(ChatMessage::assistant("mock chat reply"))
    }

    async fn generate_image(&self, _prompt: &str) -> Result<String> {
        Ok("https://img.example.com/mock.png".to_string())
    }

    async fn describe_image(&self, _image_url: &str) -> Result<ChatMessage> {
        Ok(ChatMessage::assistant("a mock caption"))
    }

    async fn speech(&self, _input: &str) -> Result<Vec<u8>> {
        Ok(vec![0x49, 0x44, 0x33]) // "ID3"
    }

    async fn transcribe(&self, _audio: Vec<u8>, _filename: &str) -> Result<String> {
        Ok("mock transcript".to_string())
    }

    async fn embed(&self, _input: &str) -> Result<Vec<f32>> {
        Ok(vec![0.1, 0.2, 0.3])
    }

    async fn moderate(&self, _input: &str) -> Result<ModerationVerdict> {
        Ok(ModerationVerdict::clean())
    }

    async fn create_message(
        &self,
        thread_id: &str,
        role: Role,
        content: &str,
    ) -> Result<ThreadMessage> {
        self.create_message_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_create_message {
            return Err(ProviderError::api_error(
                404,
                format!("No thread found with id '{}'", thread_id),
            ));
        }

        Ok(ThreadMessage {
            id: format!("msg_{}", uuid::Uuid::new_v4()),
            role,
            content: content.to_string(),
            created_at: chrono::Utc::now(),
        })
    }

    async fn create_run(&self, thread_id: &str, _assistant_id: &str) -> Result<RunHandle> {
        self.create_run_calls.fetch_add(1, Ordering::SeqCst);

        // First scripted run id wins; fall back to a fixed id so tests that
        // never script anything still get a handle
        let run_id = self
            .scripts
            .lock()
            .unwrap()
            .keys()
            .min()
            .cloned()
            .unwrap_or_else(|| "r1".to_string());

        Ok(RunHandle::new(thread_id, run_id))
    }

    async fn get_run_status(&self, _thread_id: &str, run_id: &str) -> Result<RunStatus> {
        *self
            .queries
            .lock()
            .unwrap()
            .entry(run_id.to_string())
            .or_insert(0) += 1;

        let status = self
            .scripts
            .lock()
            .unwrap()
            .get_mut(run_id)
            .and_then(VecDeque::pop_front)
            .unwrap_or(RunStatus::InProgress);

        Ok(status)
    }

    async fn list_messages(&self, _thread_id: &str) -> Result<Vec<ThreadMessage>> {
        self.list_messages_calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![Self::reply("mock reply")])
    }
}
