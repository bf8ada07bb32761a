//! # recap-llm
//!
//! Chat-completion client for the recap summary backend.
//!
//! The orchestrator talks to the hosted model through the
//! [`CompletionClient`] trait so a test double can stand in for the
//! network. [`OpenAiClient`] is the production implementation: an
//! OpenAI-compatible HTTP backend that works against OpenRouter,
//! OpenAI, or any gateway speaking the same chat-completions wire
//! format.
//!
//! ## Key Types
//!
//! - [`CompletionClient`] - The seam between orchestration and the model
//! - [`OpenAiClient`] - reqwest-based production backend
//! - [`ChatMessage`] / [`Role`] - Ordered prompt messages

mod openai;
mod traits;

pub use openai::OpenAiClient;
pub use traits::{ChatMessage, CompletionClient, CompletionError, Role};
