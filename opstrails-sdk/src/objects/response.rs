//! API response types for the events endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Receipt returned for an accepted event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventReceipt {
    /// Server-assigned event identifier.
    pub id: String,
    /// Server-assigned ingestion timestamp.
    pub time: String,
    /// Any further fields the server attaches are kept as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Wire form of the response: a single object discriminated by `success`.
#[derive(Debug, Deserialize)]
struct RawResponse {
    /// Absent counts as false, so any parseable body classifies.
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<EventReceipt>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

/// The events endpoint response, as an exhaustive union.
#[derive(Debug, Clone)]
pub enum ApiResponse {
    /// `success: true` with a receipt.
    Success(EventReceipt),
    /// `success: false`, or a success flag without a receipt.
    Error { error: String, code: String },
}

impl ApiResponse {
    /// Parse a response body, resolving the `success` discriminator.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let raw: RawResponse = serde_json::from_slice(body)?;
        Ok(match raw {
            RawResponse {
                success: true,
                data: Some(receipt),
                ..
            } => ApiResponse::Success(receipt),
            RawResponse { error, code, .. } => ApiResponse::Error {
                error: error.unwrap_or_default(),
                code: code.unwrap_or_default(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_success_response() {
        let body = br#"{"success":true,"data":{"id":"evt_123","time":"2024-01-01T00:00:00Z","region":"eu"}}"#;
        match ApiResponse::from_json(body).unwrap() {
            ApiResponse::Success(receipt) => {
                assert_eq!(receipt.id, "evt_123");
                assert_eq!(receipt.time, "2024-01-01T00:00:00Z");
                assert_eq!(receipt.extra["region"], "eu");
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn parses_error_response() {
        let body = br#"{"success":false,"error":"Bad request","code":"INVALID_EVENT"}"#;
        match ApiResponse::from_json(body).unwrap() {
            ApiResponse::Error { error, code } => {
                assert_eq!(error, "Bad request");
                assert_eq!(code, "INVALID_EVENT");
            }
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn success_without_receipt_is_an_error() {
        let body = br#"{"success":true}"#;
        match ApiResponse::from_json(body).unwrap() {
            ApiResponse::Error { error, code } => {
                assert_eq!(error, "");
                assert_eq!(code, "");
            }
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn body_without_success_flag_classifies_as_an_error() {
        match ApiResponse::from_json(b"{}").unwrap() {
            ApiResponse::Error { error, code } => {
                assert_eq!(error, "");
                assert_eq!(code, "");
            }
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_json_body() {
        assert!(ApiResponse::from_json(b"<html>502</html>").is_err());
    }
}
