use thiserror::Error;

use crate::prompt::PromptError;

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("Prompt failed: {0}")]
    Prompt(#[from] PromptError),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("No categories configured")]
    NoCategories,
}
