use std::io::Write;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    cli::commands::{Cli, Command},
    compose::{ComposeError, Composer, Presets, is_empty_message},
    config::{Config, Session},
    prompt::{Prompter, TerminalPrompter},
    tools::{buffer::TextBuffer, cli::CliExecutor, files::MessageFile},
};

/// What `compose --json` prints
#[derive(Serialize, Debug, PartialEq)]
pub struct ComposedMessage {
    pub text: String,
    pub cursor: usize,
}

pub struct CommandHandler<'a> {
    cli_command: &'a Cli,
}

impl<'a> CommandHandler<'a> {
    pub fn new(cli_command: &'a Cli) -> Self {
        Self { cli_command }
    }

    /// Answers given on the command line
    pub fn presets(&self) -> Presets {
        let cli = self.cli_command;
        let scope = if cli.no_scope {
            Some(None)
        } else {
            cli.scope.clone().map(Some)
        };

        Presets {
            category: cli.category.clone(),
            scope,
            breaking: match (cli.breaking, cli.no_breaking) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
        }
    }

    pub async fn handle(&self) -> anyhow::Result<()> {
        let config = Config::load(self.cli_command.config.as_deref())?;
        let mut session = Session::new(config);
        let command = self
            .cli_command
            .command
            .clone()
            .unwrap_or(Command::Compose { json: false });
        debug!(?command, "Handling command");

        match command {
            Command::Compose { json } => {
                run_compose(
                    &mut session,
                    TerminalPrompter::stdio(),
                    self.presets(),
                    json,
                    std::io::stdout(),
                )?;
            }
            Command::Hook { file, source, sha } => {
                info!(?file, ?source, ?sha, "Running as prepare-commit-msg hook");
                self.hook(&mut session, MessageFile::new(file)).await?;
            }
            Command::Categories => {
                list_categories(&session.config, std::io::stdout())?;
            }
        }

        Ok(())
    }

    async fn hook(&self, session: &mut Session, file: MessageFile) -> anyhow::Result<()> {
        let git_comment_char = CliExecutor::new().git_comment_char().await;
        session.config.comment_prefix = comment_prefix(git_comment_char.as_deref(), &session.config.comment_prefix);

        // git does not hand its stdin to hooks, so ask on the terminal directly
        let open_prompter = || -> std::io::Result<Box<dyn Prompter>> {
            if atty::is(atty::Stream::Stdin) {
                Ok(Box::new(TerminalPrompter::stdio()))
            } else {
                Ok(Box::new(TerminalPrompter::tty()?))
            }
        };

        fill_message_file(session, &file, self.presets(), open_prompter).await?;
        Ok(())
    }
}

/// The comment prefix git will strip: `core.commentChar` when set, except `auto` which lets git
/// choose per message, otherwise the configured one.
pub fn comment_prefix(git_comment_char: Option<&str>, configured: &str) -> String {
    match git_comment_char {
        Some(value) if !value.is_empty() && value != "auto" => value.to_string(),
        _ => configured.to_string(),
    }
}

/// Compose and print the result. `out` receives the composed line (or JSON) and nothing else.
pub fn run_compose(
    session: &mut Session,
    prompter: impl Prompter,
    presets: Presets,
    json: bool,
    mut out: impl Write,
) -> anyhow::Result<ComposedMessage> {
    let composed = compose(session, prompter, presets)?;
    if json {
        writeln!(out, "{}", serde_json::to_string(&composed)?)?;
    } else {
        writeln!(out, "{}", composed.text)?;
    }
    Ok(composed)
}

/// Read the message file, compose into it when the user has not written anything yet and write it
/// back. The prompter is only opened once composing is needed; when it cannot be opened the file is
/// left alone. Returns whether the file changed.
pub async fn fill_message_file<P: Prompter>(
    session: &mut Session,
    file: &MessageFile,
    presets: Presets,
    open_prompter: impl FnOnce() -> std::io::Result<P>,
) -> anyhow::Result<bool> {
    let mut buffer = file.read().await?;
    if !is_empty_message(buffer.text(), &session.config.comment_prefix) {
        info!(path = ?file.path(), "Message already written; leaving it untouched");
        return Ok(false);
    }

    let prompter = match open_prompter() {
        Ok(prompter) => prompter,
        Err(e) => {
            warn!(%e, "No terminal available; leaving the message untouched");
            return Ok(false);
        }
    };

    let changed = fill_empty_message(session, prompter, presets, &mut buffer)?;
    if changed {
        file.write(&buffer).await?;
    }
    Ok(changed)
}

/// Compose a prefix into an empty buffer
pub fn compose(session: &mut Session, prompter: impl Prompter, presets: Presets) -> Result<ComposedMessage, ComposeError> {
    let mut buffer = TextBuffer::default();
    Composer::new(session, prompter)
        .with_presets(presets)
        .compose_into(&mut buffer)?;

    Ok(ComposedMessage {
        cursor: buffer.cursor(),
        text: buffer.into_text(),
    })
}

/// Prepend a prefix to a commit message the user has not started yet. Returns whether the buffer
/// changed.
pub fn fill_empty_message(
    session: &mut Session,
    prompter: impl Prompter,
    presets: Presets,
    buffer: &mut TextBuffer,
) -> Result<bool, ComposeError> {
    if !is_empty_message(buffer.text(), &session.config.comment_prefix) {
        return Ok(false);
    }

    buffer.goto(0);
    Composer::new(session, prompter)
        .with_presets(presets)
        .compose_into(buffer)?;
    Ok(true)
}

pub fn list_categories(config: &Config, mut writer: impl Write) -> std::io::Result<()> {
    let width = config
        .categories
        .iter()
        .map(|c| c.short_code.len())
        .max()
        .unwrap_or(0);

    for category in &config.categories {
        write!(writer, "{:width$}  {}", category.short_code, category.name, width = width)?;
        if !category.aliases.is_empty() {
            write!(writer, " ({})", category.aliases.join(", "))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use clap::Parser;

    use super::*;
    use crate::{
        compose::Category,
        prompt::tests::{Answer, ScriptedPrompter},
    };

    fn session() -> Session {
        Session::new(Config::default())
    }

    #[test]
    fn presets_from_args() {
        let cli = Cli::parse_from(["commit-compose", "-t", "feat", "--no-scope", "--no-breaking"]);
        let presets = CommandHandler::new(&cli).presets();

        assert_eq!(presets.category.as_deref(), Some("feat"));
        assert_eq!(presets.scope, Some(None));
        assert_eq!(presets.breaking, Some(false));
    }

    #[test]
    fn breaking_preset_from_args() {
        let cli = Cli::parse_from(["commit-compose", "hook", "--breaking", "msg"]);

        assert_eq!(CommandHandler::new(&cli).presets().breaking, Some(true));
    }

    #[test]
    fn no_presets_by_default() {
        let cli = Cli::parse_from(["commit-compose"]);
        let presets = CommandHandler::new(&cli).presets();

        assert!(presets.category.is_none());
        assert!(presets.scope.is_none());
        assert!(presets.breaking.is_none());
    }

    #[test]
    fn compose_reports_text_and_cursor() {
        let mut session = session();
        let prompter = ScriptedPrompter::new(&[
            Answer::Choice("fix"),
            Answer::Confirm(true),
            Answer::Text("auth"),
            Answer::Confirm(true),
        ]);

        let composed = compose(&mut session, prompter, Presets::default()).expect("composed");

        assert_eq!(
            composed,
            ComposedMessage {
                text: "fix(auth)!:  ".to_string(),
                cursor: 12,
            }
        );
        assert_eq!(
            serde_json::to_string(&composed).expect("json"),
            r#"{"text":"fix(auth)!:  ","cursor":12}"#
        );
    }

    #[test]
    fn hook_fills_an_empty_message() {
        let mut session = session();
        let mut buffer = TextBuffer::new("\n# Please enter the commit message for your changes.\n");
        let presets = Presets {
            category: Some("feat".to_string()),
            scope: Some(None),
            breaking: Some(false),
        };

        let changed = fill_empty_message(&mut session, ScriptedPrompter::default(), presets, &mut buffer).expect("composed");

        assert!(changed);
        assert_eq!(buffer.text(), "feat:  \n# Please enter the commit message for your changes.\n");
        assert_eq!(buffer.cursor(), 6);
    }

    #[test]
    fn hook_keeps_a_started_message() {
        let mut session = session();
        let mut buffer = TextBuffer::new("wip: half done\n# comment\n");
        let mut prompter = ScriptedPrompter::default();

        let changed = fill_empty_message(&mut session, &mut prompter, Presets::default(), &mut buffer).expect("no-op");

        assert!(!changed);
        assert_eq!(buffer.text(), "wip: half done\n# comment\n");
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn hook_respects_comment_prefix() {
        let mut session = session();
        session.config.comment_prefix = ";".to_string();
        let mut buffer = TextBuffer::new("# not a comment\n");

        let changed = fill_empty_message(&mut session, ScriptedPrompter::default(), Presets::default(), &mut buffer)
            .expect("no-op");

        assert!(!changed);
    }

    #[test]
    fn compose_output_holds_only_the_json() {
        let mut session = session();
        let mut prompts: Vec<u8> = Vec::new();
        let prompter = TerminalPrompter::new(Cursor::new(b"feat\nn\nn\n".to_vec()), &mut prompts);
        let mut out: Vec<u8> = Vec::new();

        run_compose(&mut session, prompter, Presets::default(), true, &mut out).expect("composed");

        assert_eq!(String::from_utf8(out).expect("utf8"), "{\"text\":\"feat:  \",\"cursor\":6}\n");
        let prompts = String::from_utf8(prompts).expect("utf8");
        assert!(prompts.contains("Type: "));
        assert!(prompts.contains("Breaking change?"));
    }

    #[test]
    fn compose_output_holds_only_the_line() {
        let mut session = session();
        let mut prompts: Vec<u8> = Vec::new();
        let prompter = TerminalPrompter::new(Cursor::new(b"fix\nn\ny\n".to_vec()), &mut prompts);
        let mut out: Vec<u8> = Vec::new();

        run_compose(&mut session, prompter, Presets::default(), false, &mut out).expect("composed");

        assert_eq!(String::from_utf8(out).expect("utf8"), "fix!:  \n");
    }

    #[test]
    fn git_comment_char_overrides_configured_prefix() {
        assert_eq!(comment_prefix(Some(";"), "#"), ";");
    }

    #[test]
    fn auto_or_missing_comment_char_keeps_configured_prefix() {
        assert_eq!(comment_prefix(Some("auto"), "#"), "#");
        assert_eq!(comment_prefix(Some(""), "#"), "#");
        assert_eq!(comment_prefix(None, "%"), "%");
    }

    #[tokio::test]
    async fn message_file_is_filled_and_written_back() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("COMMIT_EDITMSG");
        std::fs::write(&path, "\n; Please enter the commit message\n").expect("seed the file");
        let mut session = session();
        session.config.comment_prefix = comment_prefix(Some(";"), &session.config.comment_prefix);
        let presets = Presets {
            category: Some("bug".to_string()),
            scope: Some(Some("hook".to_string())),
            breaking: Some(false),
        };

        let changed = fill_message_file(&mut session, &MessageFile::new(&path), presets, || {
            Ok(ScriptedPrompter::default())
        })
        .await
        .expect("filled");

        assert!(changed);
        assert_eq!(
            std::fs::read_to_string(&path).expect("read back"),
            "fix(hook):  \n; Please enter the commit message\n"
        );
    }

    #[tokio::test]
    async fn started_message_file_is_not_touched() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("COMMIT_EDITMSG");
        std::fs::write(&path, "wip\n# comment\n").expect("seed the file");
        let mut session = session();

        let changed = fill_message_file(
            &mut session,
            &MessageFile::new(&path),
            Presets::default(),
            || -> std::io::Result<ScriptedPrompter> { panic!("no prompter needed for a started message") },
        )
        .await
        .expect("left alone");

        assert!(!changed);
        assert_eq!(std::fs::read_to_string(&path).expect("read back"), "wip\n# comment\n");
    }

    #[tokio::test]
    async fn missing_terminal_leaves_message_file_alone() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("COMMIT_EDITMSG");
        std::fs::write(&path, "\n# comment\n").expect("seed the file");
        let mut session = session();

        let changed = fill_message_file(&mut session, &MessageFile::new(&path), Presets::default(), || {
            Err::<ScriptedPrompter, _>(std::io::Error::new(std::io::ErrorKind::NotFound, "no tty"))
        })
        .await
        .expect("left alone");

        assert!(!changed);
        assert_eq!(std::fs::read_to_string(&path).expect("read back"), "\n# comment\n");
    }

    #[test]
    fn categories_are_listed_in_order() {
        let config = Config {
            categories: vec![
                Category::new("Features", "feat", &["feature"]),
                Category::new("Continuous Integration", "ci", &[]),
            ],
            ..Default::default()
        };
        let mut out: Vec<u8> = Vec::new();

        list_categories(&config, &mut out).expect("list");

        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "feat  Features (feature)\nci    Continuous Integration\n"
        );
    }
}
