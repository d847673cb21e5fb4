//! # Google Drive Provider
//!
//! Implements the [`RemoteStore`](core_fetch::RemoteStore) trait for Google
//! Drive API v3.
//!
//! ## Overview
//!
//! This crate provides:
//! - Paginated file listing (`files.list`) with parent-folder scoping
//! - Raw content downloads (`alt=media`)
//! - Fixed-format exports for Drive-native documents (`files.export`)
//! - Classification of Drive HTTP statuses into the fetch error taxonomy
//!
//! Authentication is external: every call receives a bearer
//! [`Credential`](core_fetch::Credential) obtained elsewhere; the connector
//! stores no token and performs no refresh.

pub mod connector;
pub mod types;

pub use connector::{DriveConnector, EXPORT_MIME_TYPE};
pub use types::{DriveFile, FilesListResponse, FOLDER_MIME_TYPE, GOOGLE_APPS_MIME_PREFIX};
