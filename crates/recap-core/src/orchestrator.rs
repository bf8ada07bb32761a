use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use recap_llm::{ChatMessage, CompletionClient};

use crate::error::SummaryError;
use crate::prompt::SummaryPrompts;

/// Title used when the request carries no task description.
pub const DEFAULT_SUMMARY_TITLE: &str = "Automated Context Summary";

/// A candidate must be longer than this many characters after trimming.
const MIN_SUMMARY_CHARS: usize = 10;

/// Attempt bound and backoff for rejected completions.
///
/// The model occasionally returns an empty or truncated body; retrying
/// the identical request usually recovers. The bound keeps a
/// persistently failing upstream from pinning a request forever.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: usize,
    pub initial_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_backoff: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: usize, initial_backoff: Duration) -> Self {
        Self {
            max_attempts,
            initial_backoff,
        }
    }
}

/// Input to a summary run.
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    pub task_description: Option<String>,
    pub diff_report: String,
}

/// A generated summary. Request-scoped: never stored, never shared.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub title: String,
    pub markdown: String,
}

/// Drives the completion request, validates the candidate, and retries
/// rejections up to the configured bound with exponential backoff.
pub struct SummaryOrchestrator<'a> {
    client: &'a dyn CompletionClient,
    policy: RetryPolicy,
}

impl<'a> SummaryOrchestrator<'a> {
    pub fn new(client: &'a dyn CompletionClient) -> Self {
        Self {
            client,
            policy: RetryPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Generate a summary for the given request.
    ///
    /// The title is the task description when supplied, otherwise
    /// [`DEFAULT_SUMMARY_TITLE`].
    pub async fn run(&self, request: &SummaryRequest) -> Result<Summary, SummaryError> {
        let messages = SummaryPrompts::build_messages(
            request.task_description.as_deref(),
            &request.diff_report,
        );
        debug!(
            diff_len = request.diff_report.len(),
            has_task = request.task_description.is_some(),
            "Built summary prompt"
        );

        let markdown = self.complete_validated(&messages).await?;

        let title = request
            .task_description
            .clone()
            .unwrap_or_else(|| DEFAULT_SUMMARY_TITLE.to_string());

        Ok(Summary { title, markdown })
    }

    /// Call the model until a candidate passes validation or the
    /// attempt bound is exhausted. Each attempt is a fresh call with
    /// identical messages; rejected content is discarded, not cached.
    async fn complete_validated(&self, messages: &[ChatMessage]) -> Result<String, SummaryError> {
        let mut backoff = self.policy.initial_backoff;

        for attempt in 1..=self.policy.max_attempts {
            debug!(attempt, "Requesting summary completion");

            // A transport or API error is not retried here: it escapes
            // the loop and surfaces as an error envelope to the caller.
            let candidate = self.client.complete(messages).await?;

            if Self::is_acceptable(&candidate) {
                info!(
                    attempt,
                    chars = candidate.trim().chars().count(),
                    "Summary accepted"
                );
                return Ok(candidate);
            }

            warn!(
                attempt,
                chars = candidate.trim().chars().count(),
                "Model returned an empty or too-short summary"
            );

            if attempt < self.policy.max_attempts {
                tokio::time::sleep(backoff).await;
                backoff *= 2;
            }
        }

        Err(SummaryError::Exhausted {
            attempts: self.policy.max_attempts,
        })
    }

    fn is_acceptable(candidate: &str) -> bool {
        candidate.trim().chars().count() > MIN_SUMMARY_CHARS
    }
}
