//! Lazy, pull-based page sequence over a remote listing
//!
//! The pager replaces the "accumulate into a growing list, re-render on every
//! page" pattern with an explicit cursor the caller drives: the UI can render
//! the first page immediately and pull further pages only on demand (e.g., on
//! scroll). Accumulation, if wanted, is the caller's business.

use tracing::{debug, instrument};

use crate::error::Result;
use crate::store::RemoteStore;
use crate::types::{Credential, PageToken, RemoteEntry, Scope};

/// Pull-based iterator over the pages of one logical listing query.
///
/// Pages are consumed strictly in the order the remote store issues
/// continuation tokens; there are no out-of-order or parallel page fetches.
/// A pager is restartable-from-scratch only: construct a new one to list
/// again from the first page.
///
/// After a failed [`next_page`](EntryPager::next_page) the continuation state
/// is unchanged, so a caller that hit a
/// [`Transient`](crate::FetchError::Transient) failure may simply call
/// `next_page` again to retry the same page.
pub struct EntryPager<'a> {
    store: &'a dyn RemoteStore,
    credential: &'a Credential,
    scope: Scope,
    next: Option<PageToken>,
    finished: bool,
}

impl<'a> EntryPager<'a> {
    /// Create a pager positioned before the first page of `scope`.
    pub fn new(store: &'a dyn RemoteStore, credential: &'a Credential, scope: Scope) -> Self {
        Self {
            store,
            credential,
            scope,
            next: None,
            finished: false,
        }
    }

    /// Whether the listing has been fully consumed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Pull the next page of entries.
    ///
    /// Returns `Ok(None)` once the remote store stops issuing continuation
    /// tokens. An empty page is a valid result and distinct from exhaustion.
    #[instrument(skip(self), fields(scope = %self.scope))]
    pub async fn next_page(&mut self) -> Result<Option<Vec<RemoteEntry>>> {
        if self.finished {
            return Ok(None);
        }

        let result = self
            .store
            .list_page(self.credential, &self.scope, self.next.as_ref())
            .await?;

        debug!(
            entries = result.entries.len(),
            has_next = result.next_page.is_some(),
            "Fetched listing page"
        );

        self.next = result.next_page;
        if self.next.is_none() {
            self.finished = true;
        }

        Ok(Some(result.entries))
    }

    /// Drain all remaining pages into a single ordered sequence.
    ///
    /// Entries appear in page order with each page's internal order
    /// preserved. Equivalent to looping over [`next_page`](Self::next_page)
    /// until exhaustion.
    pub async fn collect_remaining(&mut self) -> Result<Vec<RemoteEntry>> {
        let mut all = Vec::new();
        while let Some(page) = self.next_page().await? {
            all.extend(page);
        }
        Ok(all)
    }
}
