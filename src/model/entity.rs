//! Entity telemetry data model.
//!
//! A snapshot of whatever entity the scanner is currently aimed at. Each
//! update from the host replaces the previous snapshot wholesale; there are
//! no merge semantics.

use serde::{Deserialize, Serialize};

// ===== Vec3 =====

/// A world-space vector (position or rotation).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// Render in the host's `vector3(x, y, z)` notation with two decimals.
    pub fn display(&self) -> String {
        format!("vector3({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

// ===== EntityInfo =====

/// Telemetry snapshot for a single scanned entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityInfo {
    /// Entity handle.
    pub entity: i64,
    /// Model hash, numeric form.
    pub hash: i64,
    /// Model hash, string form shown in the panel.
    pub hash_str: String,
    /// World position.
    pub coords: Vec3,
    /// Rotation.
    pub rotation: Vec3,
    /// Heading in degrees.
    pub heading: f64,
    /// Entity type label (ped, vehicle, object, ...).
    #[serde(rename = "type")]
    pub entity_type: String,
    /// Network identifier; the host sends either a number or a string.
    pub network_id: NetworkId,
}

impl EntityInfo {
    /// Heading formatted with two decimals.
    pub fn heading_display(&self) -> String {
        format!("{:.2}", self.heading)
    }
}

// ===== NetworkId =====

/// Network identifier in either of the host's two wire forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NetworkId {
    /// Numeric identifier.
    Number(i64),
    /// String identifier (including placeholders like "-").
    Text(String),
}

impl std::fmt::Display for NetworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkId::Number(n) => write!(f, "{n}"),
            NetworkId::Text(s) => write!(f, "{s}"),
        }
    }
}

// ===== ScannerInstructions =====

/// The capture/cancel instruction text shown under the scanner panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerInstructions {
    /// How to capture the current entity's data.
    pub capture: String,
    /// How to cancel the scanner.
    pub cancel: String,
}

impl Default for ScannerInstructions {
    fn default() -> Self {
        Self {
            capture: "ENTER - Capture Entity Data".to_string(),
            cancel: "RIGHT CLICK - Cancel Scanner".to_string(),
        }
    }
}
