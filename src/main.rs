use clap::Parser;
use cli::commands::Cli;
use tracing::debug;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::handlers::CommandHandler;

mod cli;
mod compose;
mod config;
mod prompt;
mod tools;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    debug!(?cli, "Arguments parsed");

    CommandHandler::new(&cli).handle().await
}

/// Log to a file so the output never mixes with the prompts
fn init_logging() -> anyhow::Result<()> {
    let file = std::fs::File::create(std::env::temp_dir().join("commit-compose.log"))?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "commit_compose=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(file))
        .init();
    Ok(())
}
