//! OpsTrails SDK
//!
//! Shared payload types for the OpsTrails event-ingestion API, plus (behind
//! the `client` cargo feature) an HTTP client for submitting events.

#[cfg(feature = "client")]
pub mod client;
pub mod objects;
