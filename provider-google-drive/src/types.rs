//! Google Drive API response types
//!
//! Data structures for deserializing Google Drive API v3 responses.

use core_fetch::{EntryKind, RemoteEntry};
use serde::Deserialize;

/// MIME type Google Drive assigns to folders
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// MIME type prefix of Drive-native documents (Docs, Sheets, Slides, ...)
///
/// These have no raw byte representation and must be exported to a target
/// format before transfer.
pub const GOOGLE_APPS_MIME_PREFIX: &str = "application/vnd.google-apps";

/// Google Drive API file resource, limited to the fields we request
///
/// See: https://developers.google.com/drive/api/v3/reference/files#resource
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    /// File ID
    pub id: String,

    /// File name
    pub name: String,

    /// MIME type
    pub mime_type: String,

    /// File size in bytes as a decimal string (absent for folders and
    /// Drive-native documents)
    #[serde(default)]
    pub size: Option<String>,
}

impl DriveFile {
    /// Classify the Drive MIME type into an entry kind
    pub fn kind(&self) -> EntryKind {
        if self.mime_type == FOLDER_MIME_TYPE {
            EntryKind::Folder
        } else if self.mime_type.starts_with(GOOGLE_APPS_MIME_PREFIX) {
            EntryKind::ExportableDocument
        } else {
            EntryKind::File
        }
    }

    /// Convert into the provider-agnostic entry model
    pub fn into_remote_entry(self) -> RemoteEntry {
        let kind = self.kind();
        // Folders never carry a usable size, whatever the payload says.
        let size_bytes = match kind {
            EntryKind::Folder => None,
            _ => self.size.and_then(|s| s.parse().ok()),
        };

        RemoteEntry {
            id: self.id,
            name: self.name,
            kind,
            size_bytes,
        }
    }
}

/// Google Drive API files.list response
///
/// See: https://developers.google.com/drive/api/v3/reference/files/list
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilesListResponse {
    /// Listed files; Drive omits the array entirely for an empty result
    #[serde(default)]
    pub files: Vec<DriveFile>,

    /// Token for the next page, absent on the last page
    #[serde(default)]
    pub next_page_token: Option<String>,
}
