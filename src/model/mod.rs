//! Domain data model (pure data, no I/O).

pub mod entity;
pub mod error;
pub mod menu;
pub mod notification;

pub use entity::{EntityInfo, NetworkId, ScannerInstructions, Vec3};
pub use error::{AppError, InputError, ParseError};
pub use menu::{Icon, IconKind, MenuData, MenuOption, SearchIndexEntry};
pub use notification::{NotificationData, NotificationKind, DEFAULT_NOTIFICATION_DURATION_MS};
