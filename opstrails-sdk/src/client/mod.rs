//! HTTP client for the OpsTrails event-ingestion API.
//!
//! Behind the `client` cargo feature: consumers that only want the payload
//! types can skip the `reqwest` dependency.

mod events;

pub use events::{DEFAULT_API_URL, EventsClient, REQUEST_TIMEOUT};

/// Errors produced by the SDK HTTP client.
///
/// Each variant's `Display` output is the exact message shown to the user,
/// so the formats here are load-bearing.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request exceeded the 30-second deadline.
    #[error("Request to OpsTrails API timed out after {}s", REQUEST_TIMEOUT.as_secs())]
    Timeout,

    /// Transport-level failure (DNS, TLS, connection reset, …).
    #[error("{0}")]
    Http(reqwest::Error),

    /// The response body was not valid JSON.
    #[error("OpsTrails API returned non-JSON response ({status}): {status_text}")]
    NonJson { status: u16, status_text: String },

    /// The server reported a failure, via HTTP status or the `success` flag.
    #[error("OpsTrails API error ({status}): {error} [{code}]")]
    Api {
        status: u16,
        error: String,
        code: String,
    },

    /// The base URL could not be combined with the endpoint path.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}
