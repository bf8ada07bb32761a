use recap_llm::ChatMessage;

/// Fixed system instruction for the summary model.
///
/// Covers both request shapes: when a task description is supplied the
/// model summarizes against it, otherwise it infers the task from the
/// diff alone.
const SYSTEM_PROMPT: &str = r#"You are an expert context re-entry assistant. A developer was interrupted mid-task and needs to get back up to speed quickly.

You will be given the developer's uncommitted git changes, and sometimes a description of the task they were working on. If no task description is given, infer the task from the changes themselves.

Respond in Markdown with:
- A high-level title (e.g., "Refactoring the Agent Logic").
- A "Summary" section describing what the developer was doing.
- A "Key Changes" section (bullet points).
- A "Suggested Next Steps" section (e.g., "commit changes", "push branch")."#;

/// Prompt composition for the summary workflow
pub struct SummaryPrompts;

impl SummaryPrompts {
    /// Build the ordered message list handed to the completion model.
    ///
    /// Always exactly two entries: the fixed system instruction, then a
    /// user message carrying the task description (when present) and
    /// the diff report.
    pub fn build_messages(task_description: Option<&str>, diff_report: &str) -> Vec<ChatMessage> {
        let user_content = match task_description {
            Some(task) => format!("Task: {task}\n\nDiff:\n{diff_report}"),
            None => format!("Diff:\n{diff_report}"),
        };

        vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(user_content),
        ]
    }
}
