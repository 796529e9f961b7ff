//! CloudEvent payload types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

/// The CloudEvents spec version sent in every payload.
pub const SPEC_VERSION: &str = "1.0";

/// Placeholder `time` attribute. The ingest API assigns the authoritative
/// timestamp on receipt, so clients send this fixed sentinel.
pub const TIME_PLACEHOLDER: &str = "NOW";

/// Event severity levels accepted by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Minor,
    Major,
    Critical,
}

impl Severity {
    /// The wire form of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Minor => "MINOR",
            Severity::Major => "MAJOR",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A severity string did not name one of the known levels.
///
/// The `Display` output is the message surfaced to the user, so it lists
/// the full valid set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid severity \"{0}\". Must be one of: LOW, MINOR, MAJOR, CRITICAL")]
pub struct InvalidSeverity(pub String);

impl FromStr for Severity {
    type Err = InvalidSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Severity::Low),
            "MINOR" => Ok(Severity::Minor),
            "MAJOR" => Ok(Severity::Major),
            "CRITICAL" => Ok(Severity::Critical),
            other => Err(InvalidSeverity(other.to_string())),
        }
    }
}

/// A CloudEvents-shaped event payload.
///
/// Optional attributes are omitted from the JSON entirely when unset; the
/// API never sees an empty string or an explicit null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudEvent {
    pub specversion: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub source: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}

impl CloudEvent {
    /// Create a payload with only the required attributes set.
    pub fn new(event_type: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            specversion: SPEC_VERSION.to_string(),
            event_type: event_type.into(),
            source: source.into(),
            time: TIME_PLACEHOLDER.to_string(),
            subject: None,
            version: None,
            severity: None,
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_parses_all_valid_levels() {
        assert_eq!("LOW".parse::<Severity>(), Ok(Severity::Low));
        assert_eq!("MINOR".parse::<Severity>(), Ok(Severity::Minor));
        assert_eq!("MAJOR".parse::<Severity>(), Ok(Severity::Major));
        assert_eq!("CRITICAL".parse::<Severity>(), Ok(Severity::Critical));
    }

    #[test]
    fn severity_rejects_unknown_level_with_full_valid_set() {
        let err = "urgent".parse::<Severity>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid severity \"urgent\". Must be one of: LOW, MINOR, MAJOR, CRITICAL"
        );
    }

    #[test]
    fn severity_is_case_sensitive() {
        assert!("low".parse::<Severity>().is_err());
    }

    #[test]
    fn required_only_payload_has_exactly_four_attributes() {
        let event = CloudEvent::new("deployment.finished", "//github.com/org/repo");
        let value = serde_json::to_value(&event).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["source", "specversion", "time", "type"]);
        assert_eq!(object["specversion"], "1.0");
        assert_eq!(object["type"], "deployment.finished");
        assert_eq!(object["source"], "//github.com/org/repo");
        assert_eq!(object["time"], "NOW");
    }

    #[test]
    fn optional_attributes_serialize_when_set() {
        let mut event = CloudEvent::new("deployment.finished", "//github.com/org/repo");
        event.subject = Some("api".to_string());
        event.version = Some("1.2.3".to_string());
        event.severity = Some(Severity::Major);

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["subject"], "api");
        assert_eq!(value["version"], "1.2.3");
        assert_eq!(value["severity"], "MAJOR");
    }
}
