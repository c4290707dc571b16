//! hudlink
//!
//! Host-driven game overlay engine with a TUI front end. A host process
//! streams JSONL commands (menus, notifications, entity telemetry) into the
//! overlay; user interactions flow back to the host as JSONL reports.
//!
//! Architecture follows Pure Core / Impure Shell: everything under
//! [`state`] is a pure state machine over an injected clock, while
//! [`source`], [`report`] and [`view`] do the I/O at the edges.

pub mod config;
pub mod logging;
pub mod model;
pub mod protocol;
pub mod report;
pub mod source;
pub mod state;
pub mod view;

// Re-export main loop integration
pub mod integration;
