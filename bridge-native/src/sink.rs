//! Directory Download Sink using Tokio

use async_trait::async_trait;
use bridge_traits::{error::Result, sink::DownloadSink};
use bytes::Bytes;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// Download sink that writes each file into a fixed local directory.
///
/// The suggested name is sanitized to a bare filename before writing, so a
/// remote entry named `../../etc/passwd` cannot escape the target directory.
/// An existing file with the same name is overwritten.
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    /// Create a sink writing into `root`. The directory is created on the
    /// first save if it does not exist.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Reduce a suggested name to a safe bare filename.
    fn sanitize_name(suggested: &str) -> String {
        let base = suggested
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(suggested)
            .trim();

        let cleaned = base.trim_start_matches('.');
        if cleaned.is_empty() {
            "unnamed".to_string()
        } else {
            cleaned.to_string()
        }
    }
}

#[async_trait]
impl DownloadSink for DirectorySink {
    async fn save(&self, suggested_name: &str, data: Bytes) -> Result<()> {
        fs::create_dir_all(&self.root).await?;

        let name = Self::sanitize_name(suggested_name);
        let path = self.root.join(&name);
        fs::write(&path, data.as_ref()).await?;

        debug!(file = %name, size = data.len(), "Saved file");
        Ok(())
    }
}
