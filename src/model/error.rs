//! Error types for the hudlink application.
//!
//! Hierarchical error taxonomy using `thiserror`. Errors compose via `?` and
//! `From` conversions into the top-level [`AppError`].
//!
//! # Recovery strategy
//!
//! Malformed host messages are **non-fatal**: the offending line is logged
//! and skipped, and the overlay keeps running with its current state; the
//! host, not this overlay, is the authoritative error sink. Input-source and
//! terminal errors are fatal and propagate to the top-level handler.
//! Outbound transport failures never become errors at all; they are logged
//! and swallowed at the reporter (fire-and-forget contract).

use std::path::PathBuf;
use thiserror::Error;

// ===== AppError =====

/// Top-level application error encompassing all fatal failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the host command stream.
    ///
    /// Fatal: without an input source there is nothing to drive the overlay.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Terminal or TUI rendering error from the crossterm/ratatui layer.
    ///
    /// Fatal: without a working terminal the overlay cannot render.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber initialization failed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),
}

// ===== InputError =====

/// Errors reading the host command stream from a file or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The command script file does not exist.
    #[error("Command file not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// No input source available: no file argument and stdin is a TTY.
    #[error(
        "No input source: provide a command file path, pipe commands via stdin, or pass --demo"
    )]
    NoInput,

    /// Generic I/O failure reading the source.
    #[error("I/O error reading input: {0}")]
    Io(#[from] std::io::Error),
}

// ===== ParseError =====

/// Errors parsing a single inbound host message line.
///
/// Always non-fatal: the caller logs the line number and moves on.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The line is not valid JSON.
    #[error("Invalid JSON at line {line}: {message}")]
    InvalidJson {
        /// 1-based line number within the command stream.
        line: usize,
        /// Underlying serde_json error text.
        message: String,
    },

    /// The envelope is valid JSON but has no `action` field.
    #[error("Missing action field at line {line}")]
    MissingAction {
        /// 1-based line number within the command stream.
        line: usize,
    },
}

impl ParseError {
    /// Line number the error occurred on.
    pub fn line(&self) -> usize {
        match self {
            ParseError::InvalidJson { line, .. } | ParseError::MissingAction { line } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_preserves_line_number() {
        let err = ParseError::InvalidJson {
            line: 42,
            message: "unexpected end".to_string(),
        };
        assert_eq!(err.line(), 42);
        assert!(err.to_string().contains("line 42"));
    }

    #[test]
    fn input_error_no_input_mentions_remedies() {
        let msg = InputError::NoInput.to_string();
        assert!(msg.contains("No input source"));
        assert!(msg.contains("pipe") || msg.contains("file path"));
    }

    #[test]
    fn input_error_converts_to_app_error() {
        fn fails() -> Result<(), AppError> {
            Err(InputError::NoInput)?
        }
        assert!(matches!(fails(), Err(AppError::InputRead(_))));
    }
}
