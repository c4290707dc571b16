//! File-based command source for script replay.
//!
//! Loads an entire JSONL command script at construction and hands it over
//! on the first poll. Useful for replaying a captured host session against
//! the overlay.

use crate::model::error::InputError;
use std::fs;
use std::path::{Path, PathBuf};

/// Read-once command script source.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    lines: Vec<String>,
    drained: bool,
}

impl FileSource {
    /// Load the script at the given path.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    /// Returns `InputError::Io` for other I/O errors.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let lines = content.lines().map(str::to_string).collect();

        Ok(Self {
            path: path.to_path_buf(),
            lines,
            drained: false,
        })
    }

    /// Build a source over an in-memory script (the demo session).
    pub(crate) fn from_lines(lines: Vec<String>) -> Self {
        Self {
            path: PathBuf::from("<builtin>"),
            lines,
            drained: false,
        }
    }

    /// Path the script was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return all script lines on the first call, an empty vec after.
    pub fn drain_lines(&mut self) -> Vec<String> {
        if self.drained {
            return Vec::new();
        }
        self.drained = true;
        std::mem::take(&mut self.lines)
    }
}
