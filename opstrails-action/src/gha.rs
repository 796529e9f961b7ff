//! GitHub Actions runtime plumbing.
//!
//! Workflow commands are printed to stdout in the `::command::value` form
//! the runner parses. Step outputs are appended to the file named by the
//! `GITHUB_OUTPUT` environment variable.

use std::fs::OpenOptions;
use std::io::Write;

/// Escape a value for the workflow-command protocol. The runner reads one
/// command per line, so CR and LF must be percent-encoded.
fn escape(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Register `secret` to be masked in all subsequent log output.
pub fn add_mask(secret: &str) {
    println!("::add-mask::{}", escape(secret));
}

/// Emit a warning annotation.
pub fn warning(message: &str) {
    println!("::warning::{}", escape(message));
}

/// Emit an error annotation. The caller is expected to exit nonzero so the
/// step is marked failed.
pub fn set_failed(message: &str) {
    println!("::error::{}", escape(message));
}

/// Append a step output to the `GITHUB_OUTPUT` file.
///
/// Multi-line values use the heredoc form; single-line values the plain
/// `name=value` form. Outside the runner (no `GITHUB_OUTPUT`) the output is
/// dropped, which keeps local runs working.
pub fn set_output(name: &str, value: &str) -> std::io::Result<()> {
    let Some(path) = std::env::var_os("GITHUB_OUTPUT") else {
        tracing::debug!(name, value, "GITHUB_OUTPUT not set, skipping step output");
        return Ok(());
    };

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if value.contains('\n') || value.contains('\r') {
        let delimiter = heredoc_delimiter(value);
        writeln!(file, "{name}<<{delimiter}")?;
        writeln!(file, "{value}")?;
        writeln!(file, "{delimiter}")?;
    } else {
        writeln!(file, "{name}={value}")?;
    }
    Ok(())
}

/// Pick a heredoc delimiter that does not occur in `value`, so the value
/// itself can never terminate the block early.
fn heredoc_delimiter(value: &str) -> String {
    let mut delimiter = String::from("ghadelimiter");
    while value.contains(&delimiter) {
        delimiter.push('_');
    }
    delimiter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_percent_encodes_command_breakers() {
        assert_eq!(escape("100%\r\ndone"), "100%25%0D%0Adone");
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn heredoc_delimiter_avoids_the_value() {
        assert_eq!(heredoc_delimiter("line one\nline two"), "ghadelimiter");
        let tricky = "payload\nghadelimiter\nghadelimiter_\nrest";
        let delimiter = heredoc_delimiter(tricky);
        assert!(!tricky.contains(&delimiter));
    }
}
