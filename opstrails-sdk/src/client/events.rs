//! Events API client (CI job → OpsTrails server).
//!
//! A single-endpoint client: it POSTs one CloudEvent and interprets the
//! success/error union the server returns. Requests carry a bearer token
//! and are bounded by an explicit per-request deadline.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use super::ClientError;
use crate::objects::{ApiResponse, CloudEvent, EventReceipt};

/// Default base URL of the OpsTrails API.
pub const DEFAULT_API_URL: &str = "https://api.opstrails.dev";

/// Deadline applied to the whole request, connect through body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Typed HTTP client for the OpsTrails **Events API**.
#[derive(Debug, Clone)]
pub struct EventsClient {
    http: Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl EventsClient {
    /// Create a new `EventsClient`.
    ///
    /// * `base_url` – root URL of the OpsTrails API; trailing slashes are
    ///   tolerated.
    /// * `api_key` – bearer token for the `Authorization` header.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Replace the default `reqwest::Client` with a custom one.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// Override the request deadline. The default is [`REQUEST_TIMEOUT`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn endpoint(&self) -> Result<Url, ClientError> {
        let base = self.base_url.trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/api/v1/events"))?)
    }

    /// `POST /api/v1/events` – submit a single event.
    pub async fn track_event(&self, event: &CloudEvent) -> Result<EventReceipt, ClientError> {
        let url = self.endpoint()?;

        let resp = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(event)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(wrap_transport_error)?;

        interpret_response(resp).await
    }
}

fn wrap_transport_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout
    } else {
        ClientError::Http(err)
    }
}

async fn interpret_response(resp: reqwest::Response) -> Result<EventReceipt, ClientError> {
    let status = resp.status();
    let bytes = resp.bytes().await.map_err(wrap_transport_error)?;

    let Ok(parsed) = ApiResponse::from_json(&bytes) else {
        return Err(ClientError::NonJson {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        });
    };

    match parsed {
        ApiResponse::Success(receipt) if status.is_success() => Ok(receipt),
        // A failure status wins even when the body claims success.
        ApiResponse::Success(_) => Err(ClientError::Api {
            status: status.as_u16(),
            error: String::new(),
            code: String::new(),
        }),
        ApiResponse::Error { error, code } => Err(ClientError::Api {
            status: status.as_u16(),
            error,
            code,
        }),
    }
}
