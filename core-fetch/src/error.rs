//! Error types for remote tree fetching
//!
//! The taxonomy distinguishes failures the caller must react to differently:
//! a rejected credential triggers re-authentication, a transient failure may
//! be retried with the same pagination state, a missing entry is non-fatal
//! inside batch operations, and a malformed payload is fatal for that call.

use thiserror::Error;

/// Remote tree fetch errors
#[derive(Error, Debug)]
pub enum FetchError {
    /// Credential was empty at construction time
    #[error("Bearer credential must not be empty")]
    EmptyCredential,

    /// Remote store rejected the credential (expired or invalid token)
    #[error("Credential rejected by remote store (status {status})")]
    CredentialRejected { status: u16 },

    /// Connectivity failure or server-side error; retryable with the same
    /// pagination state
    #[error("Transient network failure: {0}")]
    Transient(String),

    /// Entry vanished between listing and download
    #[error("Remote entry not found: {id}")]
    NotFound { id: String },

    /// Remote payload was missing expected fields or was not valid JSON
    #[error("Malformed remote response: {0}")]
    MalformedResponse(String),

    /// Remote store returned a status outside the known taxonomy
    #[error("Remote store error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Folders carry no byte content; use a folder download instead
    #[error("Entry {id} is a folder and cannot be downloaded directly")]
    NotDownloadable { id: String },

    /// The download sink rejected the transferred bytes
    #[error("Download sink failed: {0}")]
    Sink(#[source] bridge_traits::BridgeError),
}

impl FetchError {
    /// Whether the caller may retry the failed call with unchanged inputs
    /// (same scope, same page token).
    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchError::Transient(_))
    }

    /// Whether the failure should be surfaced to the auth collaborator for
    /// re-authentication. Never retried from within the core.
    pub fn is_auth(&self) -> bool {
        matches!(self, FetchError::CredentialRejected { .. })
    }
}

/// Result type for fetch operations
pub type Result<T> = std::result::Result<T, FetchError>;
