//! CloudEvent assembly from the action inputs.
//!
//! Pure functions, no I/O: validation failures come back as errors and the
//! non-fatal data warning comes back as a value, so the caller decides how
//! to surface them.

use std::str::FromStr;

use opstrails_sdk::objects::{CloudEvent, Severity};
use serde_json::{Map, Value};

use crate::error::ActionError;
use crate::inputs::ActionInputs;

/// Resolve the CloudEvent source: an explicit input wins, otherwise the
/// repository identifier from the environment (possibly empty, unvalidated).
pub fn resolve_source(explicit: Option<&str>, github_repository: &str) -> String {
    match explicit {
        Some(source) => source.to_string(),
        None => format!("//github.com/{github_repository}"),
    }
}

/// Build the optional `data` object from `description` and the raw `data`
/// input.
///
/// Returns the object, if either input was present, plus a warning when the
/// raw JSON could not be merged. Unusable `data` never fails the run; the
/// description-only object still goes through.
pub fn build_data(
    description: Option<&str>,
    raw: Option<&str>,
) -> (Option<Map<String, Value>>, Option<String>) {
    if description.is_none() && raw.is_none() {
        return (None, None);
    }

    let mut data = Map::new();
    if let Some(description) = description {
        data.insert(
            "description".to_string(),
            Value::String(description.to_string()),
        );
    }

    let mut warning = None;
    if let Some(raw) = raw {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(parsed)) => {
                // Shallow merge; a `description` key in the input wins.
                for (key, value) in parsed {
                    data.insert(key, value);
                }
            }
            Ok(_) => {
                warning = Some(format!("Ignoring 'data' input, not a JSON object: {raw}"));
            }
            Err(_) => {
                warning = Some(format!(
                    "Failed to parse 'data' input as JSON, ignoring: {raw}"
                ));
            }
        }
    }

    (Some(data), warning)
}

/// Assemble the full payload. Validates `type` and `severity` but performs
/// no network I/O.
pub fn build_event(
    inputs: &ActionInputs,
    github_repository: &str,
) -> Result<(CloudEvent, Option<String>), ActionError> {
    let Some(event_type) = inputs.event_type.as_deref() else {
        return Err(ActionError::MissingInput("type"));
    };

    let severity = inputs
        .severity
        .as_deref()
        .map(Severity::from_str)
        .transpose()?;

    let source = resolve_source(inputs.source.as_deref(), github_repository);
    let (data, warning) = build_data(inputs.description.as_deref(), inputs.data.as_deref());

    let mut event = CloudEvent::new(event_type, source);
    event.subject = inputs.subject.clone();
    event.version = inputs.version.clone();
    event.severity = severity;
    event.data = data;

    Ok((event, warning))
}
