use std::path::PathBuf;
use std::process::Stdio;

use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, warn};

/// Report returned when the working tree has no uncommitted changes.
pub const NO_CHANGES_REPORT: &str = "No uncommitted changes found in the working tree.";

/// Report returned when no workspace path was supplied.
pub const MISSING_PATH_REPORT: &str = "No workspace_path provided; cannot collect a diff.";

#[derive(Error, Debug)]
pub enum DiffError {
    #[error("Failed to run git: {0}")]
    Io(#[from] std::io::Error),

    #[error("git exited with code {code}: {stderr}")]
    GitFailed { code: i32, stderr: String },
}

/// Collects uncommitted changes from a git working tree.
///
/// Invokes the `git` binary as a child process with explicit argument
/// vectors. The contract is plain text in every outcome: diff sections,
/// a fixed no-changes sentinel, or a descriptive error message. Callers
/// treat the report as opaque prose and never see an `Err`.
pub struct DiffCollector {
    git_binary: PathBuf,
}

impl Default for DiffCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffCollector {
    pub fn new() -> Self {
        Self {
            git_binary: PathBuf::from("git"),
        }
    }

    pub fn with_binary(path: PathBuf) -> Self {
        Self { git_binary: path }
    }

    /// Collect unstaged and staged diffs for the given workspace path.
    ///
    /// Runs `git diff` and `git diff --cached` scoped to the workspace
    /// and concatenates the non-empty sections, unstaged first.
    pub async fn collect(&self, workspace_path: &str) -> String {
        if workspace_path.trim().is_empty() {
            warn!("Diff requested without a workspace path");
            return MISSING_PATH_REPORT.to_string();
        }

        let unstaged = match self.run_diff(workspace_path, &["diff"]).await {
            Ok(text) => text,
            Err(e) => {
                warn!(workspace_path, error = %e, "Failed to collect unstaged diff");
                return format!("Failed to collect git diff: {e}");
            }
        };

        let staged = match self.run_diff(workspace_path, &["diff", "--cached"]).await {
            Ok(text) => text,
            Err(e) => {
                warn!(workspace_path, error = %e, "Failed to collect staged diff");
                return format!("Failed to collect git diff: {e}");
            }
        };

        if unstaged.trim().is_empty() && staged.trim().is_empty() {
            debug!(workspace_path, "Working tree is clean");
            return NO_CHANGES_REPORT.to_string();
        }

        let mut report = String::new();
        if !unstaged.trim().is_empty() {
            report.push_str("UNSTAGED CHANGES:\n");
            report.push_str(&unstaged);
        }
        if !staged.trim().is_empty() {
            if !report.is_empty() {
                report.push('\n');
            }
            report.push_str("STAGED CHANGES:\n");
            report.push_str(&staged);
        }

        debug!(workspace_path, report_len = report.len(), "Collected diff report");
        report
    }

    async fn run_diff(&self, workspace_path: &str, args: &[&str]) -> Result<String, DiffError> {
        let output = Command::new(&self.git_binary)
            .args(args)
            .current_dir(workspace_path)
            .stdin(Stdio::null())
            .output()
            .await?;

        if !output.status.success() {
            return Err(DiffError::GitFailed {
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
