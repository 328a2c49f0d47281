mod terminal;

pub use terminal::TerminalPrompter;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Failed to talk to the terminal: {0}")]
    Io(#[from] std::io::Error),
    #[error("Prompt aborted")]
    Aborted,
}

/// Something that can ask the user questions, e.g. a terminal or a scripted test double
pub trait Prompter {
    /// Ask for one of `choices`. With `require_match` the answer must be one of them; the
    /// implementation keeps asking until it is.
    fn choose_one(&mut self, prompt: &str, choices: &[String], require_match: bool) -> Result<String, PromptError>;

    /// Ask a yes/no question
    fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError>;

    /// Ask for free text. `suggestions` are offered as completions only; any answer is accepted.
    fn read_text(&mut self, prompt: &str, suggestions: &[String]) -> Result<String, PromptError>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn choose_one(&mut self, prompt: &str, choices: &[String], require_match: bool) -> Result<String, PromptError> {
        (**self).choose_one(prompt, choices, require_match)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        (**self).confirm(prompt)
    }

    fn read_text(&mut self, prompt: &str, suggestions: &[String]) -> Result<String, PromptError> {
        (**self).read_text(prompt, suggestions)
    }
}

impl<P: Prompter + ?Sized> Prompter for Box<P> {
    fn choose_one(&mut self, prompt: &str, choices: &[String], require_match: bool) -> Result<String, PromptError> {
        (**self).choose_one(prompt, choices, require_match)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        (**self).confirm(prompt)
    }

    fn read_text(&mut self, prompt: &str, suggestions: &[String]) -> Result<String, PromptError> {
        (**self).read_text(prompt, suggestions)
    }
}
