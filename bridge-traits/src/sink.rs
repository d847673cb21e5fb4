//! Download Sink Abstraction
//!
//! The sink is the collaborator that receives downloaded bytes together with a
//! suggested filename. How the bytes are persisted is a platform concern:
//! a directory write on desktop, a save-as dialog on the web, a share sheet on
//! mobile.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::Result;

/// Receives downloaded file contents.
///
/// The fetch core calls [`save`](DownloadSink::save) once per downloaded file,
/// after the full payload has been transferred. The suggested name is the
/// remote entry name as-is; implementations are responsible for making it safe
/// for their target (path sanitization, collision handling).
#[async_trait]
pub trait DownloadSink: Send + Sync {
    /// Persist a downloaded file.
    ///
    /// # Errors
    ///
    /// Returns an error when the bytes could not be persisted (disk full,
    /// permission denied, user dismissed the save dialog, ...).
    async fn save(&self, suggested_name: &str, data: Bytes) -> Result<()>;
}
