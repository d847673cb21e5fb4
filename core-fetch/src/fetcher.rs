//! Remote tree fetcher
//!
//! Orchestrates paginated listing and folder materialization over a
//! [`RemoteStore`], delivering downloaded bytes to a [`DownloadSink`].
//!
//! ## Overview
//!
//! The fetcher is stateless: every operation takes the credential explicitly
//! and nothing is cached between calls. Folder downloads walk the tree with an
//! explicit work stack rather than call recursion, which bounds stack depth on
//! deeply nested hierarchies and gives cancellation and progress reporting a
//! natural checkpoint between items.
//!
//! Children are processed sequentially, never in parallel. The remote store
//! enforces per-credential rate limits, so sequential processing is the
//! backpressure mechanism, and it keeps download order deterministic (it
//! matches listing order, depth-first).

use bridge_traits::sink::DownloadSink;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use crate::error::{FetchError, Result};
use crate::pager::EntryPager;
use crate::store::RemoteStore;
use crate::types::{
    Credential, DownloadedFile, EntryKind, ListingResult, PageToken, RemoteEntry, Scope,
};

/// A single failed item inside a folder download.
#[derive(Debug)]
pub struct FolderDownloadFailure {
    /// The entry that failed
    pub entry: RemoteEntry,
    /// Why it failed
    pub error: FetchError,
}

/// Outcome of a folder download.
///
/// Folder downloads are fail-soft: one child's failure is recorded here and
/// processing continues with its siblings. Only a failure to list the folder's
/// own children aborts the whole operation.
#[derive(Debug, Default)]
pub struct FolderDownloadReport {
    /// Number of files successfully delivered to the sink
    pub downloaded: u64,
    /// Per-item failures, in processing order
    pub failures: Vec<FolderDownloadFailure>,
    /// Whether the walk stopped early due to cancellation
    pub cancelled: bool,
}

impl FolderDownloadReport {
    /// Whether every processed item succeeded and the walk ran to completion.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && !self.cancelled
    }

    /// Number of items that were attempted (successes plus failures).
    pub fn attempted(&self) -> u64 {
        self.downloaded + self.failures.len() as u64
    }
}

/// Fetches listings and file contents from a remote hierarchical store.
///
/// # Example
///
/// ```ignore
/// use core_fetch::{Credential, RemoteTreeFetcher, Scope};
/// use tokio_util::sync::CancellationToken;
///
/// let fetcher = RemoteTreeFetcher::new(store, sink);
/// let credential = Credential::new(access_token)?;
///
/// // Lazy listing: pull pages on demand.
/// let mut pages = fetcher.pages(&credential, Scope::Root);
/// while let Some(page) = pages.next_page().await? {
///     render(page);
/// }
///
/// // Recursive folder download.
/// let report = fetcher
///     .download_folder(&credential, "folder-id", &CancellationToken::new())
///     .await?;
/// println!("{} downloaded, {} failed", report.downloaded, report.failures.len());
/// ```
pub struct RemoteTreeFetcher {
    store: Arc<dyn RemoteStore>,
    sink: Arc<dyn DownloadSink>,
}

impl RemoteTreeFetcher {
    /// Create a fetcher over a remote store and a download sink.
    pub fn new(store: Arc<dyn RemoteStore>, sink: Arc<dyn DownloadSink>) -> Self {
        Self { store, sink }
    }

    /// Retrieve one page of entries under `scope`.
    ///
    /// `page_token = None` always requests the first page; a token from a
    /// previous call continues that same query. Purely a query, no side
    /// effects.
    pub async fn list_page(
        &self,
        credential: &Credential,
        scope: &Scope,
        page_token: Option<&PageToken>,
    ) -> Result<ListingResult> {
        self.store.list_page(credential, scope, page_token).await
    }

    /// Lazy page sequence over `scope`, consumed on demand by the caller.
    pub fn pages<'a>(&'a self, credential: &'a Credential, scope: Scope) -> EntryPager<'a> {
        EntryPager::new(self.store.as_ref(), credential, scope)
    }

    /// Materialize a folder's immediate children across all pages.
    #[instrument(skip(self, credential), fields(folder_id = %folder_id))]
    pub async fn resolve_folder(
        &self,
        credential: &Credential,
        folder_id: &str,
    ) -> Result<Vec<RemoteEntry>> {
        self.pages(credential, Scope::Folder(folder_id.to_string()))
            .collect_remaining()
            .await
    }

    /// Download a single entry and deliver it to the sink.
    ///
    /// Regular files transfer raw bytes; exportable documents transfer the
    /// store's fixed-format export. Folders are not directly downloadable,
    /// use [`download_folder`](Self::download_folder) instead.
    #[instrument(skip(self, credential, entry), fields(entry_id = %entry.id, kind = ?entry.kind))]
    pub async fn download_entry(
        &self,
        credential: &Credential,
        entry: &RemoteEntry,
    ) -> Result<DownloadedFile> {
        let data = match entry.kind {
            EntryKind::File => self.store.fetch_content(credential, &entry.id).await?,
            EntryKind::ExportableDocument => {
                self.store.export_content(credential, &entry.id).await?
            }
            EntryKind::Folder => {
                return Err(FetchError::NotDownloadable {
                    id: entry.id.clone(),
                })
            }
        };

        let size_bytes = data.len() as u64;
        self.sink
            .save(&entry.name, data)
            .await
            .map_err(FetchError::Sink)?;

        debug!(size_bytes, "Delivered entry to sink");

        Ok(DownloadedFile {
            name: entry.name.clone(),
            size_bytes,
        })
    }

    /// Download a folder's entire content set, recursing into nested folders.
    ///
    /// The walk is depth-first in listing order, driven by an explicit work
    /// stack. Items are processed one at a time; `cancel` is checked at each
    /// item boundary, so an in-flight transfer either completes or fails but
    /// is never aborted midway.
    ///
    /// # Errors
    ///
    /// Fails only when the folder's own children cannot be listed. Per-child
    /// failures (a vanished file, a sink error, an unlistable subfolder) are
    /// recorded in the report and processing continues with siblings. An
    /// empty folder yields a zero-count report.
    #[instrument(skip(self, credential, cancel), fields(folder_id = %folder_id))]
    pub async fn download_folder(
        &self,
        credential: &Credential,
        folder_id: &str,
        cancel: &CancellationToken,
    ) -> Result<FolderDownloadReport> {
        let children = self.resolve_folder(credential, folder_id).await?;

        let mut report = FolderDownloadReport::default();
        let mut stack: Vec<RemoteEntry> = Vec::with_capacity(children.len());
        // Reversed so the stack pops in listing order.
        stack.extend(children.into_iter().rev());

        while let Some(entry) = stack.pop() {
            if cancel.is_cancelled() {
                info!(
                    downloaded = report.downloaded,
                    remaining = stack.len() + 1,
                    "Folder download cancelled"
                );
                report.cancelled = true;
                break;
            }

            if entry.is_folder() {
                match self.resolve_folder(credential, &entry.id).await {
                    Ok(children) => stack.extend(children.into_iter().rev()),
                    Err(error) => {
                        warn!(entry_id = %entry.id, %error, "Failed to list nested folder");
                        report.failures.push(FolderDownloadFailure { entry, error });
                    }
                }
                continue;
            }

            match self.download_entry(credential, &entry).await {
                Ok(_) => report.downloaded += 1,
                Err(error) => {
                    warn!(entry_id = %entry.id, %error, "Failed to download entry");
                    report.failures.push(FolderDownloadFailure { entry, error });
                }
            }
        }

        info!(
            downloaded = report.downloaded,
            failed = report.failures.len(),
            cancelled = report.cancelled,
            "Folder download finished"
        );

        Ok(report)
    }
}
