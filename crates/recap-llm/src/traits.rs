use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single entry in the ordered message list sent to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Errors that can occur when talking to the completion API
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Completion backend misconfigured: {0}")]
    Misconfiguration(String),

    #[error("Completion request failed: {0}")]
    Transport(String),

    #[error("Completion API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Completion response missing message content")]
    MissingContent,
}

/// The core abstraction over the hosted completion model.
///
/// One configured client is constructed at process start and shared
/// across requests; handlers receive it as explicit state rather than
/// reaching for ambient globals, so tests can substitute a stub.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one ordered message list and return the generated text.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError>;
}
