//! Root overlay state.
//!
//! One explicit state object owns every component (navigation, search
//! query, notification queue, scanner) and is mutated only through the
//! transition methods below plus the message router. There are no implicit
//! shared globals.
//!
//! User-interaction entry points return the [`Report`]s the caller must
//! dispatch; host-message handling lives in [`crate::state::router`].

use crate::model::{MenuData, MenuOption};
use crate::report::Report;
use crate::state::debounce::DebouncedQuery;
use crate::state::navigation::NavigationState;
use crate::state::notifications::NotificationQueue;
use crate::state::scanner::ScannerState;
use crate::state::search::{filter_options, FilterOutcome};
use std::time::Instant;

/// Root state for the whole overlay.
#[derive(Debug, Clone, Default)]
pub struct OverlayState {
    /// Menu navigation machine.
    pub nav: NavigationState,
    /// Debounced search query for the active menu.
    pub query: DebouncedQuery,
    /// Notification queue.
    pub notices: NotificationQueue,
    /// Entity scanner state.
    pub scanner: ScannerState,
}

impl OverlayState {
    /// Fresh state: menu closed, no query, no notices, scanner inactive.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Host-driven menu transitions =====

    /// Show a fresh menu (history reset, visibility forced).
    pub fn show_menu(&mut self, menu: Option<MenuData>, now: Instant) {
        self.nav.show(menu);
        self.sync_query_with_nav(now);
    }

    /// Replace the current menu in place.
    pub fn update_menu(&mut self, menu: Option<MenuData>, now: Instant) {
        self.nav.update(menu);
        self.sync_query_with_nav(now);
    }

    /// Navigate forward into a submenu.
    pub fn navigate_to(&mut self, menu: Option<MenuData>, now: Instant) {
        self.nav.navigate_to(menu);
        self.sync_query_with_nav(now);
    }

    /// Host-driven back navigation. Pops history, or closes when history is
    /// exhausted; the close case yields the single close report.
    pub fn host_go_back(&mut self, now: Instant) -> Vec<Report> {
        let closed = self.nav.go_back();
        self.sync_query_with_nav(now);
        if closed {
            vec![Report::Closed]
        } else {
            Vec::new()
        }
    }

    /// Host-driven close. Reports only when an actual Viewing → Closed
    /// transition happened (repeated closes are idempotent).
    pub fn host_close(&mut self, now: Instant) -> Vec<Report> {
        if self.nav.close() {
            self.sync_query_with_nav(now);
            vec![Report::Closed]
        } else {
            Vec::new()
        }
    }

    // ===== User interactions =====

    /// User selected an option. Disabled options and separators produce no
    /// report and no state change.
    pub fn select_option(&self, option: &MenuOption) -> Option<Report> {
        if !option.selectable() {
            return None;
        }
        Some(Report::OptionSelected {
            option_id: option.id.clone(),
            option_data: option.clone(),
            menu_id: self.nav.current().map(|menu| menu.id.clone()),
        })
    }

    /// User navigated back. The local transition runs AND a back report is
    /// sent unconditionally, with a close report added when history was
    /// exhausted.
    pub fn user_back(&mut self, now: Instant) -> Vec<Report> {
        let closed = self.nav.go_back();
        self.sync_query_with_nav(now);
        let mut reports = vec![Report::Back];
        if closed {
            reports.push(Report::Closed);
        }
        reports
    }

    /// Escape key: closes an open menu; no-op when already closed.
    pub fn user_escape(&mut self, now: Instant) -> Vec<Report> {
        if !self.nav.visible() {
            return Vec::new();
        }
        self.nav.close();
        self.sync_query_with_nav(now);
        vec![Report::Closed]
    }

    /// User typed a character into the search box.
    pub fn search_input(&mut self, ch: char, now: Instant) {
        self.query.push_char(ch, now);
    }

    /// User deleted the last character of the search box.
    pub fn search_backspace(&mut self, now: Instant) {
        self.query.pop_char(now);
    }

    // ===== Derived display state =====

    /// The option list (or no-results state) the renderer should display for
    /// the current menu and applied query.
    pub fn visible_options(&self) -> FilterOutcome {
        match self.nav.current() {
            Some(menu) => filter_options(menu, self.query.applied(), self.nav.can_go_back()),
            None => FilterOutcome::Options(Vec::new()),
        }
    }

    // ===== Timers =====

    /// Advance every cooperative timer to `now`. Returns `true` when any
    /// state changed and the view should re-render.
    pub fn tick(&mut self, now: Instant) -> bool {
        let query_changed = self.query.tick(now);
        let notice_events = self.notices.tick(now);
        // Notification phases also change without emitting events, so a
        // pending notice always warrants a redraw at its next deadline.
        query_changed || !notice_events.is_empty() || self.notices.current().is_some()
    }

    /// Earliest pending deadline across all timers, for the event loop's
    /// poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.query.next_deadline(), self.notices.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Search state does not persist across menu levels: entering any menu
    /// with a back path clears the query immediately. Leaving the menu
    /// entirely clears it as well (the next show starts clean). A debounce
    /// deadline pending from before a return to the root menu is left to
    /// fire on its own; the query it applies is the current raw text, so
    /// the effect is benign.
    fn sync_query_with_nav(&mut self, now: Instant) {
        if self.nav.can_go_back() || !self.nav.visible() {
            self.query.set_raw("", now);
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "overlay_tests.rs"]
mod tests;
