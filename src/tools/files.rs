use std::path::{Path, PathBuf};

use tokio::{
    fs::File,
    io::{AsyncReadExt, AsyncWriteExt},
};
use tracing::debug;

use super::buffer::TextBuffer;

/// The commit message file git hands to `prepare-commit-msg`, usually `.git/COMMIT_EDITMSG`
#[derive(Debug, Clone)]
pub struct MessageFile {
    path: PathBuf,
}

impl MessageFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file into a buffer with the cursor at the start
    pub async fn read(&self) -> anyhow::Result<TextBuffer> {
        let mut file = File::open(&self.path).await?;
        let mut content = String::new();
        file.read_to_string(&mut content).await?;
        debug!(path = ?self.path, bytes = content.len(), "Message file read");

        Ok(TextBuffer::new(content))
    }

    /// Replace the file content with the buffer text
    pub async fn write(&self, buffer: &TextBuffer) -> anyhow::Result<()> {
        let mut file = File::create(&self.path).await?;
        file.write_all(buffer.text().as_bytes()).await?;
        file.flush().await?;
        debug!(path = ?self.path, "Message file written");

        Ok(())
    }
}
