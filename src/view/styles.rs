//! Overlay styling configuration.
//!
//! Distinct colors for menu options (normal, selected, disabled, applied),
//! notification severities, and the scanner panel.

use crate::model::NotificationKind;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== OverlayStyles =====

/// Style set for the whole overlay.
pub struct OverlayStyles {
    title_style: Style,
    option_style: Style,
    selected_style: Style,
    disabled_style: Style,
    separator_style: Style,
    applied_style: Style,
    search_style: Style,
    scanner_label_style: Style,
    scanner_value_style: Style,
    notice_success: Style,
    notice_error: Style,
    notice_warning: Style,
    notice_info: Style,
}

impl OverlayStyles {
    /// Create a new OverlayStyles with the default color scheme.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Create a new OverlayStyles with the given color configuration.
    ///
    /// If colors are disabled, selection falls back to REVERSED and the
    /// disabled state to DIM so the list stays readable.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                title_style: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                option_style: Style::default(),
                selected_style: Style::default()
                    .bg(Color::Cyan)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                disabled_style: Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
                separator_style: Style::default().fg(Color::DarkGray),
                applied_style: Style::default().fg(Color::Green),
                search_style: Style::default().fg(Color::Yellow),
                scanner_label_style: Style::default().fg(Color::DarkGray),
                scanner_value_style: Style::default().fg(Color::White),
                notice_success: Style::default().fg(Color::Green),
                notice_error: Style::default().fg(Color::Red),
                notice_warning: Style::default().fg(Color::Yellow),
                notice_info: Style::default().fg(Color::Blue),
            }
        } else {
            Self {
                title_style: Style::default().add_modifier(Modifier::BOLD),
                option_style: Style::default(),
                selected_style: Style::default().add_modifier(Modifier::REVERSED),
                disabled_style: Style::default().add_modifier(Modifier::DIM),
                separator_style: Style::default(),
                applied_style: Style::default(),
                search_style: Style::default(),
                scanner_label_style: Style::default(),
                scanner_value_style: Style::default(),
                notice_success: Style::default(),
                notice_error: Style::default(),
                notice_warning: Style::default(),
                notice_info: Style::default(),
            }
        }
    }

    /// Style for the menu header title.
    pub fn title(&self) -> Style {
        self.title_style
    }

    /// Style for a normal option row.
    pub fn option(&self) -> Style {
        self.option_style
    }

    /// Style for the selected option row.
    pub fn selected(&self) -> Style {
        self.selected_style
    }

    /// Style for a disabled option row.
    pub fn disabled(&self) -> Style {
        self.disabled_style
    }

    /// Style for a separator row.
    pub fn separator(&self) -> Style {
        self.separator_style
    }

    /// Style for the applied marker.
    pub fn applied(&self) -> Style {
        self.applied_style
    }

    /// Style for the search bar.
    pub fn search(&self) -> Style {
        self.search_style
    }

    /// Style for scanner field labels.
    pub fn scanner_label(&self) -> Style {
        self.scanner_label_style
    }

    /// Style for scanner field values.
    pub fn scanner_value(&self) -> Style {
        self.scanner_value_style
    }

    /// Style for a notification of the given severity.
    pub fn notice(&self, kind: NotificationKind) -> Style {
        match kind {
            NotificationKind::Success => self.notice_success,
            NotificationKind::Error => self.notice_error,
            NotificationKind::Warning => self.notice_warning,
            NotificationKind::Info => self.notice_info,
        }
    }
}

impl Default for OverlayStyles {
    fn default() -> Self {
        Self::new()
    }
}
