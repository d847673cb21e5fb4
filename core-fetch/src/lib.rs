//! # Remote Tree Fetch Core
//!
//! Provider-agnostic workflow for listing a remote hierarchical file store
//! page-by-page and materializing a folder's full content set by recursive
//! traversal.
//!
//! ## Overview
//!
//! This crate provides:
//! - The data model for remote entries, scopes and page tokens
//! - The [`RemoteStore`] seam implemented by concrete providers
//! - [`EntryPager`], a lazy pull-based page sequence
//! - [`RemoteTreeFetcher`], single-entry and recursive folder downloads with
//!   fail-soft per-item error reporting and cooperative cancellation
//!
//! The core holds no credential and no listing state: callers pass a
//! [`Credential`] into every operation and own whatever they accumulate.

pub mod error;
pub mod fetcher;
pub mod pager;
pub mod store;
pub mod types;

pub use error::{FetchError, Result};
pub use fetcher::{FolderDownloadFailure, FolderDownloadReport, RemoteTreeFetcher};
pub use pager::EntryPager;
pub use store::RemoteStore;
pub use types::{
    Credential, DownloadedFile, EntryKind, ListingResult, PageToken, RemoteEntry, Scope,
};
