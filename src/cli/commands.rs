use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Compose conventional-commit prefixes such as `fix(auth)!: ` interactively, from the terminal or
/// from a git `prepare-commit-msg` hook.
#[derive(Parser, Debug)]
#[command(name = "commit-compose", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file path, default: <config dir>/commit-compose/config.json
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Category to use instead of asking (name, short code or alias)
    #[arg(short = 't', long = "type", global = true)]
    pub category: Option<String>,

    /// Scope to use instead of asking
    #[arg(short, long, global = true, conflicts_with = "no_scope")]
    pub scope: Option<String>,

    /// Do not ask for a scope
    #[arg(long, global = true)]
    pub no_scope: bool,

    /// Mark the change as breaking instead of asking
    #[arg(short, long, global = true, conflicts_with = "no_breaking")]
    pub breaking: bool,

    /// Mark the change as not breaking instead of asking
    #[arg(long, global = true)]
    pub no_breaking: bool,
}

#[derive(Debug, Subcommand, PartialEq, Clone)]
pub enum Command {
    /// Compose a prefix and print it (default)
    Compose {
        /// Print `{"text", "cursor"}` as JSON for editor integrations
        #[arg(long)]
        json: bool,
    },
    /// Run as a git `prepare-commit-msg` hook on the given message file
    Hook {
        /// Commit message file
        file: PathBuf,
        /// Source of the message, as passed by git (message, template, merge, squash, commit)
        source: Option<String>,
        /// Commit SHA, as passed by git when amending
        sha: Option<String>,
    },
    /// List the configured categories with their short codes and aliases
    Categories,
}
