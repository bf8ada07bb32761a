//! # recap-core
//!
//! Summary orchestration for the recap backend.
//!
//! This crate holds the one piece of real control flow in the system:
//! given a diff report and an optional task description, compose the
//! prompt, call the completion model, validate the output, and retry
//! rejected completions up to a bound with exponential backoff.
//!
//! ## Key Types
//!
//! - [`SummaryOrchestrator`] - Drives completion, validation, and retry
//! - [`SummaryPrompts`] - Prompt composition
//! - [`RetryPolicy`] - Attempt bound and backoff
//! - [`Summary`] - The generated title + Markdown body

mod error;
mod orchestrator;
mod prompt;

pub use error::SummaryError;
pub use orchestrator::{
    RetryPolicy, Summary, SummaryOrchestrator, SummaryRequest, DEFAULT_SUMMARY_TITLE,
};
pub use prompt::SummaryPrompts;
