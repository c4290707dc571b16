//! Host command input sources.
//!
//! This module provides input sources for the JSONL command stream:
//! - File loading for read-once script replay
//! - Stdin for piped input (live streaming from a host process)
//! - Unified InputSource enum for both

use crate::model::error::InputError;
use std::path::PathBuf;

pub mod demo;
pub mod file;
pub mod stdin;

pub use demo::demo_source;
pub use file::FileSource;
pub use stdin::StdinSource;

/// Unified input source for the JSONL command stream.
///
/// Abstracts over script replay and stdin sources with a common interface.
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum InputSource {
    /// File source, read-once script replay.
    File(FileSource),
    /// Stdin source, reads piped commands as they arrive.
    Stdin(StdinSource),
}

impl InputSource {
    /// Poll for new command lines from the input source.
    ///
    /// Returns raw lines; parsing happens at the protocol boundary where
    /// line numbers are tracked. Non-blocking, returns immediately with
    /// whatever is available.
    ///
    /// Behavior:
    /// - File: all lines on first call, empty vec after
    /// - Stdin: incremental as data arrives
    ///
    /// # Errors
    ///
    /// Returns `InputError` for I/O errors.
    pub fn poll(&mut self) -> Result<Vec<String>, InputError> {
        match self {
            InputSource::File(f) => Ok(f.drain_lines()),
            InputSource::Stdin(s) => s.poll_lines(),
        }
    }

    /// Check if the source is still live (can receive more data).
    ///
    /// Behavior:
    /// - File: always false (static, read-once)
    /// - Stdin: true until EOF is reached
    pub fn is_live(&self) -> bool {
        match self {
            InputSource::File(_) => false,
            InputSource::Stdin(s) => !s.is_complete(),
        }
    }
}

/// Detect and create the appropriate input source.
///
/// Logic:
/// 1. If a script path is provided: create FileSource (loads on construction)
/// 2. If stdin is piped: use StdinSource
/// 3. Else: return InputError::NoInput
///
/// # Errors
///
/// Returns `InputError::NoInput` if no file is provided and stdin is a TTY.
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::Io` for I/O errors during file reading.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}
