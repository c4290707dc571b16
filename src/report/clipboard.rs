//! Clipboard copy with primary/fallback methods.
//!
//! The copy path tries the system clipboard first and falls back to an
//! OSC 52 escape sequence written to the terminal when that fails (remote
//! shells and headless sessions commonly have no system clipboard). Only
//! the resulting success flag matters to the core: whichever method
//! ultimately ran, exactly one `clipboardResult` report reflects it.

use base64::Engine as _;
use std::io::Write;
use tracing::debug;

/// One clipboard mechanism.
pub trait ClipboardBackend {
    /// Attempt to place `text` on the clipboard.
    fn copy(&mut self, text: &str) -> Result<(), String>;
}

/// Primary method: the system clipboard via `arboard`.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardBackend for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), String> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
        clipboard.set_text(text).map_err(|e| e.to_string())
    }
}

/// Fallback method: OSC 52 escape sequence through a terminal writer.
///
/// Works wherever the terminal emulator supports the sequence, including
/// over SSH where `arboard` cannot reach a display server.
pub struct Osc52Clipboard<W: Write> {
    writer: W,
}

impl<W: Write> Osc52Clipboard<W> {
    /// Wrap a terminal writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ClipboardBackend for Osc52Clipboard<W> {
    fn copy(&mut self, text: &str) -> Result<(), String> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
        write!(self.writer, "\x1b]52;c;{encoded}\x07").map_err(|e| e.to_string())?;
        self.writer.flush().map_err(|e| e.to_string())
    }
}

/// Attempt the primary method, then the fallback on failure.
///
/// Returns the success of whichever method ultimately ran. Never fails to
/// the caller; failures of both methods yield `false`.
pub fn copy_with_fallback(
    primary: &mut dyn ClipboardBackend,
    fallback: &mut dyn ClipboardBackend,
    text: &str,
) -> bool {
    match primary.copy(text) {
        Ok(()) => {
            debug!("Copied using primary clipboard method");
            true
        }
        Err(primary_err) => {
            debug!(error = %primary_err, "Primary clipboard failed, trying fallback");
            match fallback.copy(text) {
                Ok(()) => true,
                Err(fallback_err) => {
                    debug!(error = %fallback_err, "Both clipboard methods failed");
                    false
                }
            }
        }
    }
}
