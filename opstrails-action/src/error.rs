//! Action-level errors.

use opstrails_sdk::client::ClientError;
use opstrails_sdk::objects::InvalidSeverity;

/// Everything that can make a run fail.
///
/// Each variant's `Display` output is the exact failure message surfaced to
/// the workflow. All failures are terminal; the action never retries.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// A required input was unset or empty.
    #[error("Input required and not supplied: {0}")]
    MissingInput(&'static str),

    /// `severity` was supplied but is not a known level.
    #[error(transparent)]
    InvalidSeverity(#[from] InvalidSeverity),

    /// The API call failed: transport, timeout, or protocol.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The step output file could not be written.
    #[error("failed to write step output: {0}")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_message_names_the_input() {
        assert_eq!(
            ActionError::MissingInput("api-key").to_string(),
            "Input required and not supplied: api-key"
        );
    }

    #[test]
    fn severity_error_passes_through_unchanged() {
        let err = ActionError::from(InvalidSeverity("urgent".to_string()));
        assert_eq!(
            err.to_string(),
            "Invalid severity \"urgent\". Must be one of: LOW, MINOR, MAJOR, CRITICAL"
        );
    }
}
