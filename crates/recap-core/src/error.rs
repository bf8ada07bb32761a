use thiserror::Error;

use recap_llm::CompletionError;

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("Completion backend error: {0}")]
    Completion(#[from] CompletionError),

    #[error("Model returned no usable summary after {attempts} attempt(s)")]
    Exhausted { attempts: usize },
}
