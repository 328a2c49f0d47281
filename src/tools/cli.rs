use tokio::process::Command;
use tracing::debug;

/// Execute and handle command line executions
pub struct CliExecutor;

impl CliExecutor {
    /// A new Executor instance
    pub fn new() -> Self {
        Self
    }

    /// Execute a CLI command and returns the output
    pub async fn execute(&self, command: &str, args: &[&str]) -> anyhow::Result<String> {
        let output = Command::new(command).args(args).output().await?;
        if !output.status.success() {
            return Err(anyhow::anyhow!("Error executing command: {} {}", command, args.join(" ")));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// The raw `core.commentChar` setting, when the repository sets one
    pub async fn git_comment_char(&self) -> Option<String> {
        match self.execute("git", &["config", "--get", "core.commentChar"]).await {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(%e, "core.commentChar not set");
                None
            }
        }
    }
}

impl Default for CliExecutor {
    fn default() -> Self {
        Self::new()
    }
}
