//! Menu data model.
//!
//! These types are the wire shape of menus sent by the host and the domain
//! model the navigation and search subsystems operate on. Field names follow
//! the host's camelCase payloads.

use serde::{Deserialize, Serialize};

// ===== Icon =====

/// How an icon string should be interpreted by the renderer.
///
/// The kind is fixed when the menu payload is parsed, never inferred again at
/// display time. Hosts may send a plain string (classified once on ingest) or
/// the explicit tagged object form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    /// Short emoji glyph rendered inline.
    Emoji,
    /// Named glyph from an icon set (the host's `fa-*` identifiers).
    Named,
    /// Arbitrary text rendered verbatim.
    Text,
}

/// A display icon with its interpretation fixed at authoring time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IconPayload")]
pub struct Icon {
    /// Interpretation tag.
    pub kind: IconKind,
    /// The glyph or identifier itself.
    pub glyph: String,
}

impl Icon {
    /// Classify an untagged icon string the way the host authors them:
    /// glyphs of at most two characters are emoji, `fa-` prefixed strings
    /// are named icon-set identifiers, anything else is plain text.
    pub fn classify(glyph: impl Into<String>) -> Self {
        let glyph = glyph.into();
        let kind = if glyph.chars().count() <= 2 {
            IconKind::Emoji
        } else if glyph.starts_with("fa-") {
            IconKind::Named
        } else {
            IconKind::Text
        };
        Self { kind, glyph }
    }
}

/// Accepts either a bare string or the tagged object form.
#[derive(Deserialize)]
#[serde(untagged)]
enum IconPayload {
    Plain(String),
    Tagged { kind: IconKind, glyph: String },
}

impl From<IconPayload> for Icon {
    fn from(payload: IconPayload) -> Self {
        match payload {
            IconPayload::Plain(glyph) => Icon::classify(glyph),
            IconPayload::Tagged { kind, glyph } => Icon { kind, glyph },
        }
    }
}

// ===== MenuOption =====

/// A single entry in a menu's option list.
///
/// Order within the containing list is display order. Separator entries carry
/// no title or description and are never selectable or matched by search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuOption {
    /// Identifier, unique within its menu.
    pub id: String,

    /// Display title. Absent on separators.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Longer description line under the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional icon shown before the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,

    /// Disabled options render dimmed and never emit selection reports.
    #[serde(default)]
    pub disabled: bool,

    /// Marks an option whose effect is currently applied (rendered with a
    /// check marker).
    #[serde(default)]
    pub applied: bool,

    /// Separator line. Not selectable, excluded from search results.
    #[serde(default)]
    pub separator: bool,

    /// Opaque payload echoed back to the host on selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl MenuOption {
    /// Whether this option can be selected by the user.
    pub fn selectable(&self) -> bool {
        !self.disabled && !self.separator
    }
}

// ===== SearchIndexEntry =====

/// One item of the flat cross-category search index.
///
/// The index is independent of the hierarchical option list and only ever
/// accompanies the top-level menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndexEntry {
    /// Identifier of the indexed item.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Display description.
    pub description: String,
    /// Category key, passed back to the host in the materialized option.
    pub category: String,
    /// Human-readable category label appended to result descriptions.
    pub category_label: String,
    /// Icon string for the materialized option.
    #[serde(default)]
    pub icon: Option<String>,
    /// Additional free-text terms matched alongside title and description.
    pub search_terms: String,
}

// ===== MenuData =====

/// A complete menu as sent by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuData {
    /// Menu identifier, echoed in selection reports.
    pub id: String,
    /// Header title.
    pub title: String,
    /// Optional header subtitle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Ordered option list.
    #[serde(default)]
    pub options: Vec<MenuOption>,
    /// Flat search index; present only on the top-level menu.
    #[serde(default, rename = "searchData", skip_serializing_if = "Option::is_none")]
    pub search_index: Option<Vec<SearchIndexEntry>>,
}
