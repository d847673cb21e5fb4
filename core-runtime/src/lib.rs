//! # Core Runtime Module
//!
//! Foundational runtime infrastructure shared by the fetch crates:
//! - Logging and tracing setup
//! - Redaction helpers for sensitive values (bearer tokens, file paths)
//!
//! ## Overview
//!
//! This crate configures the `tracing` conventions the rest of the workspace
//! relies on. Call [`logging::init_logging`] once during application startup
//! before any fetch operation runs.

pub mod error;
pub mod logging;

pub use error::{Error, Result};
