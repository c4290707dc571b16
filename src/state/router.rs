//! Host message router.
//!
//! Dispatches each inbound [`HostMessage`] to exactly one state transition
//! and collects the side effects the shell must perform. At the state layer
//! handlers are idempotent for repeated identical messages, except the
//! operations that explicitly stack (navigate) or replace (show, update).

use crate::protocol::HostMessage;
use crate::report::Report;
use crate::state::overlay::OverlayState;
use std::time::Instant;
use tracing::debug;

/// A side effect the shell must perform after a state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Send a report to the host.
    Send(Report),
    /// Attempt a clipboard copy (primary then fallback) and report the
    /// outcome as a `clipboardResult`.
    Copy {
        /// Text to place on the clipboard.
        text: String,
        /// Description echoed in the result report.
        description: String,
    },
}

/// Apply one host message to the overlay state.
pub fn apply_message(state: &mut OverlayState, message: HostMessage, now: Instant) -> Vec<Effect> {
    match message {
        HostMessage::ShowMenu(menu) => {
            state.show_menu(menu, now);
            Vec::new()
        }
        HostMessage::HideMenu => reports_to_effects(state.host_close(now)),
        HostMessage::UpdateMenu(menu) => {
            state.update_menu(menu, now);
            Vec::new()
        }
        HostMessage::NavigateToMenu(menu) => {
            state.navigate_to(menu, now);
            Vec::new()
        }
        HostMessage::GoBack => reports_to_effects(state.host_go_back(now)),
        HostMessage::ShowNotification(Some(notification)) => {
            state.notices.enqueue(notification, now);
            Vec::new()
        }
        HostMessage::ShowNotification(None) => {
            debug!("showNotification without payload; ignoring");
            Vec::new()
        }
        HostMessage::ShowEntityScanner(instructions) => {
            state.scanner.show(instructions);
            Vec::new()
        }
        HostMessage::HideEntityScanner => {
            state.scanner.hide();
            Vec::new()
        }
        HostMessage::UpdateEntityInfo {
            entity_info,
            show_ui,
            show_no_entity,
        } => {
            state.scanner.update(entity_info, show_ui, show_no_entity);
            Vec::new()
        }
        HostMessage::CopyToClipboard {
            text: Some(text),
            description,
        } => vec![Effect::Copy {
            text,
            description: description.unwrap_or_default(),
        }],
        HostMessage::CopyToClipboard { text: None, .. } => {
            debug!("copyToClipboard without text; ignoring");
            Vec::new()
        }
    }
}

fn reports_to_effects(reports: Vec<Report>) -> Vec<Effect> {
    reports.into_iter().map(Effect::Send).collect()
}

// ===== Tests =====

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
