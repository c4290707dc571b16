//! UI state machine (pure).
//!
//! All state transitions are pure functions over explicit state values and
//! an injected clock, testable without the TUI or any I/O.

pub mod debounce;
pub mod navigation;
pub mod notifications;
pub mod overlay;
pub mod router;
pub mod scanner;
pub mod search;

// Re-export for convenience
pub use debounce::{DebouncedQuery, DEBOUNCE_DELAY};
pub use navigation::NavigationState;
pub use notifications::{ActiveNotice, NoticeEvent, NoticeId, NoticePhase, NotificationQueue};
pub use overlay::OverlayState;
pub use router::{apply_message, Effect};
pub use scanner::ScannerState;
pub use search::{filter_options, search_mode, FilterOutcome, SearchMode, MAX_ROOT_RESULTS};
