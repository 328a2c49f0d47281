use std::{
    fs::File,
    io::{self, BufRead, BufReader, Stderr, Stdin, StdinLock, Write},
};

use tracing::{debug, trace};

use super::{PromptError, Prompter};

/// Line-based prompter: questions go to `writer`, answers are read one line at a time from `reader`
pub struct TerminalPrompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl TerminalPrompter<StdinLock<'static>, Stderr> {
    /// Read answers from stdin and ask on stderr, leaving stdout to the composed result
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stderr())
    }
}

impl TerminalPrompter<BufReader<File>, File> {
    /// Prompt on the controlling terminal, used when stdin is redirected (e.g. inside a git hook)
    pub fn tty() -> io::Result<Self> {
        let input = File::open("/dev/tty")?;
        let output = File::options().write(true).open("/dev/tty")?;
        Ok(Self::new(BufReader::new(input), output))
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            debug!(%prompt, "Input closed while prompting");
            return Err(PromptError::Aborted);
        }

        let answer = line.trim().to_string();
        trace!(%prompt, %answer, "Prompt answered");
        Ok(answer)
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn choose_one(&mut self, prompt: &str, choices: &[String], require_match: bool) -> Result<String, PromptError> {
        writeln!(self.writer, "{}", choices.join(", "))?;

        loop {
            let answer = self.ask(&format!("{prompt}: "))?;
            if !require_match || choices.contains(&answer) {
                return Ok(answer);
            }
            writeln!(self.writer, "[No match]")?;
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        loop {
            let answer = self.ask(&format!("{prompt} (y or n) "))?;
            match answer.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.writer, "Please answer y or n.")?,
            }
        }
    }

    fn read_text(&mut self, prompt: &str, suggestions: &[String]) -> Result<String, PromptError> {
        if suggestions.is_empty() {
            self.ask(&format!("{prompt}: "))
        } else {
            self.ask(&format!("{prompt} [{}]: ", suggestions.join(", ")))
        }
    }
}
