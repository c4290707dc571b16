//! Inbound host message parsing.
//!
//! The host drives the overlay with JSON envelopes of the form
//! `{"action": "...", ...payload}`, one per line. Parsing happens at the
//! boundary: the rest of the crate only ever sees the typed [`HostMessage`]
//! union.
//!
//! Degradation rules: an unrecognized `action` is a silent no-op
//! (`Ok(None)`), and a missing or malformed payload field degrades the
//! message rather than failing it (the corresponding `Option` is `None`).
//! Only unparseable JSON or a missing `action` field is a [`ParseError`],
//! and even that is non-fatal to the caller.

use crate::model::{
    EntityInfo, MenuData, NotificationData, ParseError, ScannerInstructions,
};
use serde_json::Value;
use tracing::debug;

// ===== HostMessage =====

/// A recognized host command, dispatched on the envelope `action` tag.
#[derive(Debug, Clone, PartialEq)]
pub enum HostMessage {
    /// Show a menu, clearing history and forcing visibility.
    ShowMenu(Option<MenuData>),
    /// Close the menu.
    HideMenu,
    /// Replace the current menu in place, keeping history.
    UpdateMenu(Option<MenuData>),
    /// Push the current menu onto history and show a new one.
    NavigateToMenu(Option<MenuData>),
    /// Pop history, closing when it is exhausted.
    GoBack,
    /// Enqueue a notification, replacing any live one.
    ShowNotification(Option<NotificationData>),
    /// Activate the entity scanner, optionally overriding instruction text.
    ShowEntityScanner(Option<ScannerInstructions>),
    /// Deactivate the entity scanner.
    HideEntityScanner,
    /// Update the scanner's telemetry snapshot and display flags.
    UpdateEntityInfo {
        /// Replacement snapshot, if provided.
        entity_info: Option<EntityInfo>,
        /// `Some(true)` hides the no-entity fallback.
        show_ui: Option<bool>,
        /// Explicit fallback override; takes precedence over `show_ui`.
        show_no_entity: Option<bool>,
    },
    /// Copy text to the clipboard and report the outcome.
    CopyToClipboard {
        /// Text to copy.
        text: Option<String>,
        /// Human-readable description echoed in the result report.
        description: Option<String>,
    },
}

// ===== Parsing =====

/// Parse one line of the host command stream.
///
/// Returns `Ok(None)` for a well-formed envelope whose action is not
/// recognized (silent no-op per the ingestion contract).
///
/// # Errors
///
/// `ParseError::InvalidJson` when the line is not JSON at all,
/// `ParseError::MissingAction` when the envelope has no string `action`.
pub fn parse_message(line: &str, line_number: usize) -> Result<Option<HostMessage>, ParseError> {
    let envelope: Value =
        serde_json::from_str(line).map_err(|e| ParseError::InvalidJson {
            line: line_number,
            message: e.to_string(),
        })?;

    let action = envelope
        .get("action")
        .and_then(Value::as_str)
        .ok_or(ParseError::MissingAction { line: line_number })?;

    let message = match action {
        "showMenu" => Some(HostMessage::ShowMenu(menu_payload(&envelope))),
        "hideMenu" => Some(HostMessage::HideMenu),
        "updateMenu" => Some(HostMessage::UpdateMenu(menu_payload(&envelope))),
        "navigateToMenu" => Some(HostMessage::NavigateToMenu(menu_payload(&envelope))),
        "goBack" => Some(HostMessage::GoBack),
        "showNotification" => Some(HostMessage::ShowNotification(notification_payload(
            &envelope,
        ))),
        "showEntityScanner" => Some(HostMessage::ShowEntityScanner(field(
            &envelope,
            "instructions",
        ))),
        "hideEntityScanner" => Some(HostMessage::HideEntityScanner),
        "updateEntityInfo" => Some(HostMessage::UpdateEntityInfo {
            entity_info: field(&envelope, "entityInfo"),
            show_ui: envelope.get("showUI").and_then(Value::as_bool),
            show_no_entity: envelope.get("showNoEntity").and_then(Value::as_bool),
        }),
        "copyToClipboard" => Some(HostMessage::CopyToClipboard {
            text: envelope
                .get("text")
                .and_then(Value::as_str)
                .map(str::to_string),
            description: envelope
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string),
        }),
        other => {
            debug!(action = other, "Ignoring unrecognized host action");
            None
        }
    };

    Ok(message)
}

/// Extract the menu payload, checking the top-level `menu` key first and the
/// nested `data.menu` location second (the host uses both).
fn menu_payload(envelope: &Value) -> Option<MenuData> {
    field(envelope, "menu").or_else(|| nested_field(envelope, "menu"))
}

/// Extract the notification payload from `notification` or
/// `data.notification`.
fn notification_payload(envelope: &Value) -> Option<NotificationData> {
    field(envelope, "notification").or_else(|| nested_field(envelope, "notification"))
}

/// Deserialize an envelope field, degrading malformed payloads to `None`.
fn field<T: serde::de::DeserializeOwned>(envelope: &Value, key: &str) -> Option<T> {
    let value = envelope.get(key)?;
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            debug!(key, error = %e, "Dropping malformed payload field");
            None
        }
    }
}

/// Same as [`field`], but under the secondary `data` wrapper.
fn nested_field<T: serde::de::DeserializeOwned>(envelope: &Value, key: &str) -> Option<T> {
    let nested = envelope.get("data")?.get(key)?;
    match serde_json::from_value(nested.clone()) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            debug!(key, error = %e, "Dropping malformed nested payload field");
            None
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
