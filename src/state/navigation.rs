//! Menu navigation state machine.
//!
//! Two logical states: Closed and Viewing. Rather than a sum type, the
//! machine is a struct whose `visible` flag is the state discriminant;
//! `current` and `history` are only meaningful while Viewing, and every
//! transition to Closed clears them. The history stack grows only through
//! explicit navigate transitions from a non-null current menu.

use crate::model::MenuData;

/// Navigation state: current menu, back-history, visibility.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    current: Option<MenuData>,
    history: Vec<MenuData>,
    visible: bool,
}

impl NavigationState {
    /// Create the machine in its initial Closed state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The menu currently on display, if any.
    pub fn current(&self) -> Option<&MenuData> {
        self.current.as_ref()
    }

    /// Whether the overlay is in the Viewing state.
    ///
    /// The rendering layer shows the menu iff this is true.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Whether a back path exists (history non-empty).
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Current history depth.
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Show a fresh menu: history is reset regardless of prior state and the
    /// overlay becomes visible. A missing payload leaves the current menu
    /// null rather than faulting.
    pub fn show(&mut self, menu: Option<MenuData>) {
        self.current = menu;
        self.history.clear();
        self.visible = true;
    }

    /// Replace the current menu in place, keeping history.
    ///
    /// When Closed the payload is still stored as pending display, but
    /// visibility is not forced.
    pub fn update(&mut self, menu: Option<MenuData>) {
        self.current = menu;
    }

    /// Navigate forward: push the current menu onto history and display the
    /// new one. When Closed this behaves exactly as [`show`](Self::show).
    pub fn navigate_to(&mut self, menu: Option<MenuData>) {
        if !self.visible {
            self.show(menu);
            return;
        }
        if let Some(current) = self.current.take() {
            self.history.push(current);
        }
        self.current = menu;
    }

    /// Navigate backward: pop the most recent history entry, or close when
    /// history is exhausted.
    ///
    /// Returns `true` when this call performed a close transition, so the
    /// caller can emit exactly one close report.
    pub fn go_back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = Some(previous);
                false
            }
            None => self.close(),
        }
    }

    /// Close the menu from any state, clearing current menu and history.
    ///
    /// Returns `true` when this was an actual Viewing → Closed transition
    /// (a repeated close is idempotent and returns `false`, so no duplicate
    /// close report is emitted).
    pub fn close(&mut self) -> bool {
        let was_open = self.visible;
        self.visible = false;
        self.current = None;
        self.history.clear();
        was_open
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "navigation_tests.rs"]
mod tests;
