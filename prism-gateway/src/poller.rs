//! Run completion poller
//!
//! Drives a client-visible request/response cycle to completion despite the
//! underlying assistant run being asynchronous and unbounded in duration:
//! submit a message and start a run, then periodically query run status
//! until a terminal state is reached, then fetch the thread's messages.
//!
//! Poll state is scoped per call and per handle. Ticks for one handle are
//! strictly sequential: the next delay starts only after the previous status
//! query has returned, so slow responses can never cause overlapping checks.
//! The message list is delivered exactly once per invocation (single return
//! path), even if scheduling jitter delays a tick past completion.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::watch;
use tokio::time::{self, Instant};
use tracing::{debug, warn};

use prism_core::domain::message::{Role, ThreadMessage};
use prism_core::domain::run::{RunHandle, RunStatus};
use prism_provider::{AiProvider, ProviderError};

/// Polling behavior configuration
///
/// All knobs are injected rather than hard-coded so deployments can tune
/// the pressure they put on a rate-limited upstream API.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Base delay between status checks
    pub interval: Duration,

    /// Factor applied to the delay after each non-terminal check
    /// (1.0 = fixed interval)
    pub backoff_multiplier: f64,

    /// Upper bound on the delay once backoff is applied
    pub max_interval: Duration,

    /// Maximum number of status checks before giving up
    pub max_attempts: Option<u32>,

    /// Wall-clock deadline for the whole poll sequence
    pub timeout: Option<Duration>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(2500),
            backoff_multiplier: 1.0,
            max_interval: Duration::from_secs(60),
            max_attempts: None,
            timeout: None,
        }
    }
}

/// Errors produced by a poll sequence
#[derive(Debug, Error)]
pub enum PollError {
    /// The provider rejected a call
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The run reached a terminal status other than completed
    #[error("run ended with status {0}")]
    RunFailed(RunStatus),

    /// The configured deadline or attempt cap was reached first
    #[error("run did not complete after {attempts} status check(s)")]
    TimedOut {
        /// Number of status checks issued before giving up
        attempts: u32,
    },

    /// The caller cancelled the poll sequence
    #[error("polling was cancelled")]
    Cancelled,
}

/// Cancellation token for one poll sequence
///
/// Cheap to clone; all clones observe the same cancellation. Each poll
/// sequence gets its own token, so cancelling one in-flight request never
/// touches another.
#[derive(Debug, Clone)]
pub struct CancelToken {
    tx: Arc<watch::Sender<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Request cancellation; wakes any poll sequence waiting on this token
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once `cancel` has been called
    pub async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives inside this token, so wait_for can only fail if
        // every token clone is dropped, which drops this future too
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives assistant runs to completion against the provider's status oracle
#[derive(Clone)]
pub struct RunPoller {
    provider: Arc<dyn AiProvider>,
    config: PollConfig,
}

impl RunPoller {
    /// Creates a new poller
    pub fn new(provider: Arc<dyn AiProvider>, config: PollConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &PollConfig {
        &self.config
    }

    /// Appends a user message to the thread and starts an assistant run
    ///
    /// A provider rejection of either step surfaces immediately; if the
    /// message append fails, no run is ever created and polling never
    /// starts.
    pub async fn submit(
        &self,
        thread_id: &str,
        assistant_id: &str,
        text: &str,
    ) -> Result<RunHandle, PollError> {
        self.provider
            .create_message(thread_id, Role::User, text)
            .await?;

        let handle = self.provider.create_run(thread_id, assistant_id).await?;

        debug!(
            thread_id = %handle.thread_id,
            run_id = %handle.run_id,
            "Run submitted"
        );

        Ok(handle)
    }

    /// Polls the run until it reaches a terminal status
    ///
    /// On `completed`, fetches the thread's message list once and returns
    /// it. Any other terminal status fails the sequence with
    /// [`PollError::RunFailed`]; the attempt cap and deadline produce
    /// [`PollError::TimedOut`] without issuing further status checks.
    pub async fn await_completion(
        &self,
        handle: &RunHandle,
        cancel: &CancelToken,
    ) -> Result<Vec<ThreadMessage>, PollError> {
        let deadline = self.config.timeout.map(|t| Instant::now() + t);
        let mut delay = self.config.interval;
        let mut attempts: u32 = 0;

        loop {
            // Wait out the interval. Cancellation and the deadline take
            // precedence over an elapsed tick so neither can trigger one
            // final status check.
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!(run_id = %handle.run_id, "Poll sequence cancelled");
                    return Err(PollError::Cancelled);
                }
                _ = Self::sleep_until(deadline) => {
                    warn!(run_id = %handle.run_id, attempts, "Poll deadline reached");
                    return Err(PollError::TimedOut { attempts });
                }
                _ = time::sleep(delay) => {}
            }

            if let Some(max) = self.config.max_attempts
                && attempts >= max
            {
                warn!(run_id = %handle.run_id, attempts, "Poll attempt cap reached");
                return Err(PollError::TimedOut { attempts });
            }

            attempts += 1;

            let status = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(PollError::Cancelled),
                res = self
                    .provider
                    .get_run_status(&handle.thread_id, &handle.run_id) => res?,
            };

            debug!(run_id = %handle.run_id, %status, attempts, "Run status");

            match status {
                RunStatus::Completed => {
                    let messages = self.provider.list_messages(&handle.thread_id).await?;
                    return Ok(messages);
                }
                status if status.is_terminal() => {
                    return Err(PollError::RunFailed(status));
                }
                _ => {
                    delay = delay
                        .mul_f64(self.config.backoff_multiplier)
                        .min(self.config.max_interval);
                }
            }
        }
    }

    async fn sleep_until(deadline: Option<Instant>) {
        match deadline {
            Some(deadline) => time::sleep_until(deadline).await,
            None => std::future::pending().await,
        }
    }
}

impl std::fmt::Debug for RunPoller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunPoller")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockProvider;

    fn fixed_config(interval_ms: u64) -> PollConfig {
        PollConfig {
            interval: Duration::from_millis(interval_ms),
            ..PollConfig::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_then_completion_delivers_exactly_once() {
        let provider = Arc::new(MockProvider::new());
        provider.script_run(
            "r1",
            vec![
                RunStatus::Queued,
                RunStatus::InProgress,
                RunStatus::InProgress,
                RunStatus::Completed,
            ],
        );

        let poller = RunPoller::new(provider.clone(), fixed_config(2500));

        let handle = poller.submit("t1", "a1", "hello").await.unwrap();
        assert_eq!(handle, RunHandle::new("t1", "r1"));

        let messages = poller
            .await_completion(&handle, &CancelToken::new())
            .await
            .unwrap();

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "mock reply");

        // Exactly 4 status queries and exactly one message fetch
        assert_eq!(provider.status_queries("r1"), 4);
        assert_eq!(provider.list_messages_calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_count_matches_status_sequence() {
        let provider = Arc::new(MockProvider::new());
        provider.script_run("r1", vec![RunStatus::Completed]);

        let poller = RunPoller::new(provider.clone(), fixed_config(2500));
        let handle = RunHandle::new("t1", "r1");

        let start = Instant::now();
        poller
            .await_completion(&handle, &CancelToken::new())
            .await
            .unwrap();

        // One interval elapses before the first (and only) check
        assert_eq!(provider.status_queries("r1"), 1);
        assert!(start.elapsed() >= Duration::from_millis(2500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_run_fails_fast() {
        let provider = Arc::new(MockProvider::new());
        provider.script_run("r1", vec![RunStatus::InProgress, RunStatus::Failed]);

        let poller = RunPoller::new(provider.clone(), fixed_config(100));
        let handle = RunHandle::new("t1", "r1");

        let err = poller
            .await_completion(&handle, &CancelToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, PollError::RunFailed(RunStatus::Failed)));
        assert_eq!(provider.status_queries("r1"), 2);
        assert_eq!(provider.list_messages_calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_and_cancelled_statuses_are_terminal() {
        for status in [RunStatus::Cancelled, RunStatus::Expired] {
            let provider = Arc::new(MockProvider::new());
            provider.script_run("r1", vec![status]);

            let poller = RunPoller::new(provider.clone(), fixed_config(100));
            let handle = RunHandle::new("t1", "r1");

            let err = poller
                .await_completion(&handle, &CancelToken::new())
                .await
                .unwrap_err();

            assert!(matches!(err, PollError::RunFailed(s) if s == status));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_stops_ticking() {
        let provider = Arc::new(MockProvider::new());
        // Never completes: the mock keeps answering InProgress once the
        // script is exhausted
        provider.script_run("r1", vec![]);

        let config = PollConfig {
            interval: Duration::from_millis(2500),
            timeout: Some(Duration::from_secs(10)),
            ..PollConfig::default()
        };
        let poller = RunPoller::new(provider.clone(), config);
        let handle = RunHandle::new("t1", "r1");

        let start = Instant::now();
        let err = poller
            .await_completion(&handle, &CancelToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, PollError::TimedOut { .. }));
        assert!(start.elapsed() >= Duration::from_secs(10));

        // Checks at 2.5s, 5s, 7.5s; the 10s tick loses to the deadline
        let queries = provider.status_queries("r1");
        assert_eq!(queries, 3);

        // No further ticks after the error
        time::sleep(Duration::from_secs(30)).await;
        assert_eq!(provider.status_queries("r1"), queries);
    }

    #[tokio::test(start_paused = true)]
    async fn test_attempt_cap_stops_ticking() {
        let provider = Arc::new(MockProvider::new());
        provider.script_run("r1", vec![]);

        let config = PollConfig {
            interval: Duration::from_millis(100),
            max_attempts: Some(5),
            ..PollConfig::default()
        };
        let poller = RunPoller::new(provider.clone(), config);
        let handle = RunHandle::new("t1", "r1");

        let err = poller
            .await_completion(&handle, &CancelToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, PollError::TimedOut { attempts: 5 }));
        assert_eq!(provider.status_queries("r1"), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_message_failure_never_starts_a_run() {
        let provider = Arc::new(MockProvider::new().failing_create_message());

        let poller = RunPoller::new(provider.clone(), fixed_config(100));
        let err = poller.submit("t1", "a1", "hello").await.unwrap_err();

        assert!(matches!(err, PollError::Provider(_)));
        assert_eq!(provider.create_run_calls(), 0);
        assert_eq!(provider.status_queries("r1"), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_independent_handles_do_not_interfere() {
        let provider = Arc::new(MockProvider::new());
        provider.script_run("r1", vec![]);
        provider.script_run(
            "r2",
            vec![
                RunStatus::InProgress,
                RunStatus::InProgress,
                RunStatus::Completed,
            ],
        );

        let poller = RunPoller::new(provider.clone(), fixed_config(1000));

        let cancel_first = CancelToken::new();
        let first = {
            let poller = poller.clone();
            let cancel = cancel_first.clone();
            tokio::spawn(
                async move { poller.await_completion(&RunHandle::new("ta", "r1"), &cancel).await },
            )
        };
        let second = {
            let poller = poller.clone();
            tokio::spawn(async move {
                poller
                    .await_completion(&RunHandle::new("tb", "r2"), &CancelToken::new())
                    .await
            })
        };

        // Cancel the first sequence mid-flight; the second must keep its
        // own tick cadence and still deliver
        time::sleep(Duration::from_millis(1500)).await;
        cancel_first.cancel();

        let first_result = first.await.unwrap();
        assert!(matches!(first_result, Err(PollError::Cancelled)));

        let messages = second.await.unwrap().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(provider.status_queries("r2"), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_grows_delay_up_to_cap() {
        let provider = Arc::new(MockProvider::new());
        provider.script_run(
            "r1",
            vec![
                RunStatus::InProgress,
                RunStatus::InProgress,
                RunStatus::InProgress,
                RunStatus::Completed,
            ],
        );

        let config = PollConfig {
            interval: Duration::from_secs(1),
            backoff_multiplier: 2.0,
            max_interval: Duration::from_secs(2),
            ..PollConfig::default()
        };
        let poller = RunPoller::new(provider.clone(), config);
        let handle = RunHandle::new("t1", "r1");

        let start = Instant::now();
        poller
            .await_completion(&handle, &CancelToken::new())
            .await
            .unwrap();

        // Delays: 1s, 2s, then capped at 2s twice -> 7s total
        assert_eq!(provider.status_queries("r1"), 4);
        assert!(start.elapsed() >= Duration::from_secs(7));
        assert!(start.elapsed() < Duration::from_secs(8));
    }

    #[tokio::test]
    async fn test_cancel_token_is_shared_across_clones() {
        let token = CancelToken::new();
        let clone = token.clone();

        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());

        // Already-cancelled tokens resolve immediately
        clone.cancelled().await;
    }
}
