//! Sync layer: HTTP client for the remote dispute-analysis backend.

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::{DisputeClient, RemoteAnalysis, RemoteCase, SyncError};
