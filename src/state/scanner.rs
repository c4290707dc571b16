//! Entity scanner display state.
//!
//! Two independent booleans (`active`, `no_entity_fallback`) plus a wholly
//! transient telemetry snapshot. Nothing is rendered unless at least one of
//! the booleans is set; when the scanner is active and a snapshot exists,
//! the telemetry view takes priority over the no-entity fallback content.

use crate::model::{EntityInfo, ScannerInstructions};

/// Entity scanner state.
#[derive(Debug, Clone)]
pub struct ScannerState {
    active: bool,
    no_entity_fallback: bool,
    snapshot: Option<EntityInfo>,
    instructions: ScannerInstructions,
}

impl ScannerState {
    /// Inactive scanner with the default instruction text.
    pub fn new() -> Self {
        Self {
            active: false,
            no_entity_fallback: false,
            snapshot: None,
            instructions: ScannerInstructions::default(),
        }
    }

    /// Whether the scanner is active.
    pub fn active(&self) -> bool {
        self.active
    }

    /// Whether the no-entity fallback content is requested.
    pub fn no_entity_fallback(&self) -> bool {
        self.no_entity_fallback
    }

    /// Current telemetry snapshot.
    pub fn snapshot(&self) -> Option<&EntityInfo> {
        self.snapshot.as_ref()
    }

    /// Capture/cancel instruction text.
    pub fn instructions(&self) -> &ScannerInstructions {
        &self.instructions
    }

    /// Whether anything should be rendered at all.
    pub fn should_render(&self) -> bool {
        self.active || self.no_entity_fallback
    }

    /// Activate the scanner: fallback on, snapshot cleared, instruction text
    /// optionally overridden.
    pub fn show(&mut self, instructions: Option<ScannerInstructions>) {
        self.active = true;
        self.no_entity_fallback = true;
        self.snapshot = None;
        if let Some(instructions) = instructions {
            self.instructions = instructions;
        }
    }

    /// Apply a telemetry update.
    ///
    /// The snapshot is replaced wholesale when provided. `show_ui == true`
    /// clears the fallback; an explicit `show_no_entity` overrides the
    /// fallback directly and takes precedence over the `show_ui`-derived
    /// value.
    pub fn update(
        &mut self,
        entity_info: Option<EntityInfo>,
        show_ui: Option<bool>,
        show_no_entity: Option<bool>,
    ) {
        if let Some(info) = entity_info {
            self.snapshot = Some(info);
        }
        if show_ui == Some(true) {
            self.no_entity_fallback = false;
        }
        if let Some(explicit) = show_no_entity {
            self.no_entity_fallback = explicit;
        }
    }

    /// Deactivate the scanner and drop the snapshot.
    pub fn hide(&mut self) {
        self.active = false;
        self.no_entity_fallback = false;
        self.snapshot = None;
    }
}

impl Default for ScannerState {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
