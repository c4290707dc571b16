//! Outbound action reporting.
//!
//! User interactions are reported back to the host as fire-and-forget
//! records. The transport is a [`HostLink`] implementation; the default
//! writes JSON lines `{resource, endpoint, body, timestamp}` to any
//! writer. Transport failures are logged and swallowed; they never reach
//! UI state or the user.

pub mod clipboard;

use crate::model::MenuOption;
use serde_json::{json, Value};
use std::io::Write;
use tracing::warn;

/// Fallback host identity when none is configured (non-production context).
pub const FALLBACK_RESOURCE: &str = "hudlink-dev";

/// Environment variable overriding the configured host identity.
pub const RESOURCE_ENV_VAR: &str = "HUDLINK_RESOURCE";

/// Resolve the host identity: explicit configuration wins, then the
/// environment, then the fixed fallback.
pub fn resolve_resource(configured: Option<&str>) -> String {
    if let Some(resource) = configured {
        return resource.to_string();
    }
    std::env::var(RESOURCE_ENV_VAR).unwrap_or_else(|_| FALLBACK_RESOURCE.to_string())
}

// ===== Report =====

/// A user-interaction report destined for the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// A selectable option was chosen.
    OptionSelected {
        /// Id of the chosen option.
        option_id: String,
        /// The full option, echoed back with its opaque payload.
        option_data: MenuOption,
        /// Id of the containing menu, when one was on display.
        menu_id: Option<String>,
    },
    /// The user navigated back (sent unconditionally, with or without a
    /// history entry to pop).
    Back,
    /// The menu closed (exactly one per close transition).
    Closed,
    /// Outcome of a clipboard copy attempt.
    ClipboardResult {
        /// Whether any copy method ultimately succeeded.
        success: bool,
        /// Description echoed from the request.
        description: String,
    },
}

impl Report {
    /// Destination endpoint path on the host.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Report::OptionSelected { .. } => "menuOptionSelected",
            Report::Back => "menuBack",
            Report::Closed => "menuClosed",
            Report::ClipboardResult { .. } => "clipboardResult",
        }
    }

    /// JSON body posted to the endpoint.
    pub fn body(&self) -> Value {
        match self {
            Report::OptionSelected {
                option_id,
                option_data,
                menu_id,
            } => json!({
                "optionId": option_id,
                "optionData": option_data,
                "menuId": menu_id,
            }),
            Report::Back | Report::Closed => json!({}),
            Report::ClipboardResult {
                success,
                description,
            } => json!({
                "success": success,
                "description": description,
            }),
        }
    }
}

// ===== HostLink =====

/// Transport for posting a report body to a host endpoint.
pub trait HostLink {
    /// Post one report. Implementations may fail; the [`Reporter`] swallows
    /// the failure.
    fn post(&mut self, endpoint: &str, body: &Value) -> std::io::Result<()>;
}

/// JSON-lines transport: one record per report, flushed immediately so the
/// host sees each action as it happens.
#[derive(Debug)]
pub struct JsonLinesLink<W: Write> {
    resource: String,
    writer: W,
}

impl<W: Write> JsonLinesLink<W> {
    /// Create a link posting on behalf of `resource`.
    pub fn new(resource: impl Into<String>, writer: W) -> Self {
        Self {
            resource: resource.into(),
            writer,
        }
    }
}

impl<W: Write> HostLink for JsonLinesLink<W> {
    fn post(&mut self, endpoint: &str, body: &Value) -> std::io::Result<()> {
        let record = json!({
            "resource": self.resource,
            "endpoint": endpoint,
            "body": body,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        });
        serde_json::to_writer(&mut self.writer, &record)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

// ===== Reporter =====

/// Fire-and-forget report dispatcher.
#[derive(Debug)]
pub struct Reporter<L: HostLink> {
    link: L,
}

impl<L: HostLink> Reporter<L> {
    /// Wrap a transport.
    pub fn new(link: L) -> Self {
        Self { link }
    }

    /// Access the underlying transport.
    pub fn link_ref(&self) -> &L {
        &self.link
    }

    /// Send one report. Transport failure is logged and swallowed; once
    /// dispatched a report is not retractable and is never retried.
    pub fn send(&mut self, report: &Report) {
        let endpoint = report.endpoint();
        if let Err(e) = self.link.post(endpoint, &report.body()) {
            warn!(endpoint, error = %e, "Failed to send report to host");
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
