//! Remote store abstraction
//!
//! The seam between the provider-agnostic fetch workflow and a concrete
//! remote file store (Google Drive, OneDrive, ...). Implementations are
//! stateless between calls: every operation receives the credential and the
//! full query parameters explicitly.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::Result;
use crate::types::{Credential, ListingResult, PageToken, Scope};

/// A paginated, hierarchical remote file store.
///
/// # Contract
///
/// - `list_page` is a pure query: no side effects beyond the network call, no
///   hidden state between invocations. Entries come back in the order the
///   remote store provides them; implementations impose no reordering.
/// - A [`PageToken`] returned by one `list_page` call is only valid for
///   continuing the same logical query (same scope, same credential).
/// - A rejected credential surfaces as
///   [`FetchError::CredentialRejected`](crate::FetchError::CredentialRejected)
///   and is never retried by the implementation; token renewal belongs to the
///   auth collaborator.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Retrieve one page of entries under the given scope.
    ///
    /// Passing `None` for `page_token` requests the first page, regardless of
    /// any prior calls.
    async fn list_page<'a>(
        &self,
        credential: &Credential,
        scope: &Scope,
        page_token: Option<&'a PageToken>,
    ) -> Result<ListingResult>;

    /// Fetch the raw bytes of a regular file by id.
    async fn fetch_content(&self, credential: &Credential, id: &str) -> Result<Bytes>;

    /// Fetch an exported representation of a store-native document.
    ///
    /// The target format is fixed by the implementation (a portable document
    /// rendition); exportable documents have no raw byte representation.
    async fn export_content(&self, credential: &Credential, id: &str) -> Result<Bytes>;
}
