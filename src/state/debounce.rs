//! Query debouncing.
//!
//! Keystrokes set the raw query; the applied query (what the filter engine
//! sees) lags behind by [`DEBOUNCE_DELAY`] of quiescence. Clearing the query
//! to empty/whitespace bypasses the delay entirely; the asymmetry avoids
//! filter flicker while typing but restores the full list instantly on
//! clear.
//!
//! The deadline is plain data advanced by the event loop's `tick` pass; no
//! ambient timers.

use std::time::{Duration, Instant};

/// Quiescence window before a non-empty query is applied.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(150);

/// A debounced text query.
#[derive(Debug, Clone)]
pub struct DebouncedQuery {
    raw: String,
    applied: String,
    deadline: Option<Instant>,
}

impl DebouncedQuery {
    /// Empty query, nothing pending.
    pub fn new() -> Self {
        Self {
            raw: String::new(),
            applied: String::new(),
            deadline: None,
        }
    }

    /// The query as currently typed (drives the input box rendering).
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The query the filter engine should use right now.
    pub fn applied(&self) -> &str {
        &self.applied
    }

    /// Whether a deferred application is outstanding.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Replace the raw query.
    ///
    /// A trimmed-empty value is applied immediately and cancels any pending
    /// deadline; anything else (re)starts the debounce window.
    pub fn set_raw(&mut self, raw: impl Into<String>, now: Instant) {
        self.raw = raw.into();
        if self.raw.trim().is_empty() {
            self.applied = self.raw.clone();
            self.deadline = None;
        } else {
            self.deadline = Some(now + DEBOUNCE_DELAY);
        }
    }

    /// Append one typed character.
    pub fn push_char(&mut self, ch: char, now: Instant) {
        let mut raw = std::mem::take(&mut self.raw);
        raw.push(ch);
        self.set_raw(raw, now);
    }

    /// Delete the last typed character, if any.
    pub fn pop_char(&mut self, now: Instant) {
        let mut raw = std::mem::take(&mut self.raw);
        raw.pop();
        self.set_raw(raw, now);
    }

    /// Advance the debounce clock. Returns `true` when the applied query
    /// changed (the caller should re-filter).
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                if self.applied != self.raw {
                    self.applied = self.raw.clone();
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// Next instant at which [`tick`](Self::tick) could have an effect.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

impl Default for DebouncedQuery {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod tests;
