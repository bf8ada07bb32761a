//! # recap-git
//!
//! Git diff collection for the recap summary backend.
//!
//! This crate gathers a developer's uncommitted changes (staged and
//! unstaged) so the summarizer can describe what they were working on.
//! It shells out to the `git` binary rather than linking a version
//! control library, and it never fails: every outcome is a plain-text
//! report the caller can forward as-is.
//!
//! ## Key Types
//!
//! - [`DiffCollector`] - Runs `git diff` / `git diff --cached` and
//!   assembles the report
//!
//! ## Report Outcomes
//!
//! - Sectioned diff text when the working tree has uncommitted changes
//! - [`NO_CHANGES_REPORT`] when the tree is clean
//! - [`MISSING_PATH_REPORT`] when no workspace path was supplied
//! - A descriptive error message when git cannot be run

mod collector;

pub use collector::{DiffCollector, DiffError, MISSING_PATH_REPORT, NO_CHANGES_REPORT};
