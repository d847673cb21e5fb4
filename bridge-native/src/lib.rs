//! # Native Bridge Implementations
//!
//! Implementations of the `bridge-traits` abstractions for native
//! (non-browser) targets:
//! - [`ReqwestHttpClient`]: HTTP transport with connection pooling, TLS and
//!   transport-level retry
//! - [`DirectorySink`]: download sink that writes files into a local directory

pub mod http;
pub mod sink;

pub use http::ReqwestHttpClient;
pub use sink::DirectorySink;
