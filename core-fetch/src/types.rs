//! Data model for the remote hierarchical file store
//!
//! All values here are ephemeral: produced by a listing call, consumed for
//! display or download, never mutated. Accumulated listing state across pages
//! is owned by the caller; the store itself is stateless between calls.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FetchError, Result};

/// Opaque bearer credential, supplied per-call and never persisted.
///
/// Owned by the auth collaborator; this core only requires that the token is
/// usable as an HTTP bearer credential. Construction rejects empty tokens so
/// every operation is statically guaranteed a non-empty credential.
///
/// `Debug` redacts the token value to keep it out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Create a credential from a bearer token string
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::EmptyCredential`] if the token is empty or
    /// whitespace-only.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(FetchError::EmptyCredential);
        }
        Ok(Self(token))
    }

    /// Get the raw token for use in an Authorization header
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

/// Kind of a remote entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Regular file with a raw byte representation
    File,
    /// Container for other entries; no byte content of its own
    Folder,
    /// Store-native document that must be exported to a portable format
    /// before transfer
    ExportableDocument,
}

/// An entry of the remote hierarchical file store
///
/// Produced by listing calls. The id is unique, opaque and store-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteEntry {
    /// Store-assigned unique identifier
    pub id: String,
    /// Display name, also the suggested filename for downloads
    pub name: String,
    /// Entry kind
    pub kind: EntryKind,
    /// Size in bytes; present only for file-like kinds with a known size,
    /// never for folders
    pub size_bytes: Option<u64>,
}

impl RemoteEntry {
    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }
}

/// Opaque continuation marker for paginated listing
///
/// A token returned by one listing call is valid only for continuing the same
/// logical query (same scope, same credential). End-of-listing is signalled by
/// the absence of a token, not by a sentinel value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageToken(String);

impl PageToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The logical location being listed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    /// The root of the remote store
    Root,
    /// A specific folder, by store-assigned id
    Folder(String),
}

impl Scope {
    /// The folder id this scope filters on, if any
    pub fn folder_id(&self) -> Option<&str> {
        match self {
            Scope::Root => None,
            Scope::Folder(id) => Some(id),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Root => f.write_str("root"),
            Scope::Folder(id) => write!(f, "folder:{}", id),
        }
    }
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingResult {
    /// Entries in the order the remote store provided them
    pub entries: Vec<RemoteEntry>,
    /// Continuation token; `None` marks the end of the listing
    pub next_page: Option<PageToken>,
}

/// Receipt for a completed single-entry download
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadedFile {
    /// Name handed to the sink
    pub name: String,
    /// Number of bytes transferred
    pub size_bytes: u64,
}
