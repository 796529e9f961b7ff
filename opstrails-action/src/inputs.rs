//! Action inputs.
//!
//! The Actions runner exposes each input declared in `action.yml` as an
//! `INPUT_<NAME>` environment variable, and sets unsupplied inputs to the
//! empty string. Every field therefore parses as an optional string and is
//! normalized afterwards: trimmed, with empty strings treated as absent.

use clap::Parser;
use opstrails_sdk::client::DEFAULT_API_URL;

/// Track a deployment event in OpsTrails.
#[derive(Parser, Debug, Default)]
#[command(name = "opstrails-action", about, long_about = None)]
pub struct Args {
    /// OpsTrails API key, sent as the bearer token.
    #[arg(long, env = "INPUT_API-KEY")]
    pub api_key: Option<String>,

    /// CloudEvent type, e.g. `deployment.finished`.
    #[arg(long = "type", env = "INPUT_TYPE")]
    pub event_type: Option<String>,

    /// CloudEvent subject.
    #[arg(long, env = "INPUT_SUBJECT")]
    pub subject: Option<String>,

    /// Version of the thing being deployed.
    #[arg(long, env = "INPUT_VERSION")]
    pub version: Option<String>,

    /// Human-readable description, merged into the event data.
    #[arg(long, env = "INPUT_DESCRIPTION")]
    pub description: Option<String>,

    /// CloudEvent source; defaults to `//github.com/{owner}/{repo}`.
    #[arg(long, env = "INPUT_SOURCE")]
    pub source: Option<String>,

    /// Event severity: LOW, MINOR, MAJOR or CRITICAL.
    #[arg(long, env = "INPUT_SEVERITY")]
    pub severity: Option<String>,

    /// Extra event data as a JSON object.
    #[arg(long, env = "INPUT_DATA")]
    pub data: Option<String>,

    /// Base URL of the OpsTrails API.
    #[arg(long, env = "INPUT_API-URL")]
    pub api_url: Option<String>,
}

/// Inputs after empty-string normalization, with the API URL defaulted.
#[derive(Debug, Clone, Default)]
pub struct ActionInputs {
    pub api_key: Option<String>,
    pub event_type: Option<String>,
    pub subject: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub source: Option<String>,
    pub severity: Option<String>,
    pub data: Option<String>,
    pub api_url: String,
}

impl Args {
    pub fn normalize(self) -> ActionInputs {
        ActionInputs {
            api_key: normalize(self.api_key),
            event_type: normalize(self.event_type),
            subject: normalize(self.subject),
            version: normalize(self.version),
            description: normalize(self.description),
            source: normalize(self.source),
            severity: normalize(self.severity),
            data: normalize(self.data),
            api_url: normalize(self.api_url).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        }
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings_become_absent() {
        let args = Args {
            api_key: Some(String::new()),
            event_type: Some("  ".to_string()),
            subject: None,
            ..Default::default()
        };
        let inputs = args.normalize();
        assert_eq!(inputs.api_key, None);
        assert_eq!(inputs.event_type, None);
        assert_eq!(inputs.subject, None);
    }

    #[test]
    fn values_are_trimmed() {
        let args = Args {
            event_type: Some("  deployment.finished \n".to_string()),
            ..Default::default()
        };
        assert_eq!(
            args.normalize().event_type.as_deref(),
            Some("deployment.finished")
        );
    }

    #[test]
    fn api_url_defaults_when_unset() {
        let inputs = Args::default().normalize();
        assert_eq!(inputs.api_url, "https://api.opstrails.dev");
    }

    #[test]
    fn api_url_keeps_an_explicit_value() {
        let args = Args {
            api_url: Some("https://staging.opstrails.dev".to_string()),
            ..Default::default()
        };
        assert_eq!(args.normalize().api_url, "https://staging.opstrails.dev");
    }
}
