use std::fs;
use std::path::{Path, PathBuf};

use recap_git::{DiffCollector, MISSING_PATH_REPORT, NO_CHANGES_REPORT};
use tempfile::TempDir;

/// Helper: run a git command in the given directory, panicking on failure.
fn git(dir: &Path, args: &[&str]) {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Helper: create a temp repository with one committed file.
fn create_test_repo() -> TempDir {
    let dir = TempDir::new().unwrap();
    git(dir.path(), &["init"]);
    fs::write(dir.path().join("app.rs"), "fn main() {}\n").unwrap();
    git(dir.path(), &["add", "app.rs"]);
    git(
        dir.path(),
        &[
            "-c",
            "user.name=test",
            "-c",
            "user.email=test@example.com",
            "commit",
            "-m",
            "initial commit",
        ],
    );
    dir
}

// ============================================================
// Input handling
// ============================================================

#[tokio::test]
async fn test_empty_path_returns_report_without_invoking_git() {
    // A bogus binary proves git is never spawned: spawning it would fail.
    let collector = DiffCollector::with_binary(PathBuf::from("/nonexistent/git-binary"));

    let report = collector.collect("").await;
    assert_eq!(report, MISSING_PATH_REPORT);
    assert!(report.contains("No workspace_path provided"));
}

#[tokio::test]
async fn test_blank_path_returns_missing_path_report() {
    let collector = DiffCollector::with_binary(PathBuf::from("/nonexistent/git-binary"));

    let report = collector.collect("   ").await;
    assert_eq!(report, MISSING_PATH_REPORT);
}

#[tokio::test]
async fn test_nonexistent_workspace_returns_error_text() {
    let collector = DiffCollector::new();

    let report = collector.collect("/no/such/workspace/anywhere").await;
    assert!(report.starts_with("Failed to collect git diff:"));
}

#[tokio::test]
async fn test_non_repo_directory_returns_error_text() {
    let dir = TempDir::new().unwrap();
    let collector = DiffCollector::new();

    let report = collector.collect(dir.path().to_str().unwrap()).await;
    assert!(report.starts_with("Failed to collect git diff:"));
    assert!(report.contains("git exited with code"));
}

// ============================================================
// Diff assembly
// ============================================================

#[tokio::test]
async fn test_clean_repo_returns_no_changes_sentinel() {
    let repo = create_test_repo();
    let collector = DiffCollector::new();

    let report = collector.collect(repo.path().to_str().unwrap()).await;
    assert_eq!(report, NO_CHANGES_REPORT);
}

#[tokio::test]
async fn test_unstaged_changes_only() {
    let repo = create_test_repo();
    fs::write(repo.path().join("app.rs"), "fn main() { run(); }\n").unwrap();

    let collector = DiffCollector::new();
    let report = collector.collect(repo.path().to_str().unwrap()).await;

    // "UNSTAGED CHANGES:" contains "STAGED CHANGES:" as a substring, so
    // anchor the staged header to the start of a line when ruling it out.
    assert!(report.starts_with("UNSTAGED CHANGES:"));
    assert!(!report.contains("\nSTAGED CHANGES:"));
    assert!(report.contains("run();"));
}

#[tokio::test]
async fn test_staged_changes_only() {
    let repo = create_test_repo();
    fs::write(repo.path().join("lib.rs"), "pub fn helper() {}\n").unwrap();
    git(repo.path(), &["add", "lib.rs"]);

    let collector = DiffCollector::new();
    let report = collector.collect(repo.path().to_str().unwrap()).await;

    assert!(report.starts_with("STAGED CHANGES:"));
    assert!(!report.contains("UNSTAGED CHANGES:"));
    assert!(report.contains("helper()"));
}

#[tokio::test]
async fn test_both_sections_unstaged_before_staged() {
    let repo = create_test_repo();
    // Unstaged: modify the committed file.
    fs::write(repo.path().join("app.rs"), "fn main() { run(); }\n").unwrap();
    // Staged: add a new file to the index.
    fs::write(repo.path().join("lib.rs"), "pub fn helper() {}\n").unwrap();
    git(repo.path(), &["add", "lib.rs"]);

    let collector = DiffCollector::new();
    let report = collector.collect(repo.path().to_str().unwrap()).await;

    let unstaged_pos = report.find("UNSTAGED CHANGES:").expect("unstaged header");
    let staged_pos = report
        .find("\nSTAGED CHANGES:")
        .expect("staged header");
    assert!(unstaged_pos < staged_pos);

    // Each header is followed by its raw hunk text.
    assert!(report[unstaged_pos..staged_pos].contains("run();"));
    assert!(report[staged_pos..].contains("helper()"));
}

#[tokio::test]
async fn test_untracked_files_do_not_appear() {
    let repo = create_test_repo();
    fs::write(repo.path().join("scratch.txt"), "notes\n").unwrap();

    let collector = DiffCollector::new();
    let report = collector.collect(repo.path().to_str().unwrap()).await;

    // `git diff` ignores untracked files, so the tree still reads as clean.
    assert_eq!(report, NO_CHANGES_REPORT);
}
