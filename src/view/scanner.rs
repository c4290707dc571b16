//! Entity scanner panel widget.
//!
//! Shows the current telemetry snapshot field by field, the no-entity
//! fallback when nothing is under the crosshair, and the capture/cancel
//! instruction footer.

use crate::state::ScannerState;
use crate::view::styles::OverlayStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Entity scanner panel widget.
pub struct ScannerPanel<'a> {
    scanner: &'a ScannerState,
    styles: &'a OverlayStyles,
}

impl<'a> ScannerPanel<'a> {
    /// Create a new ScannerPanel widget.
    pub fn new(scanner: &'a ScannerState, styles: &'a OverlayStyles) -> Self {
        Self { scanner, styles }
    }

    fn field_line(&self, label: &str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label:<11}"), self.styles.scanner_label()),
            Span::styled(value, self.styles.scanner_value()),
        ])
    }
}

impl Widget for ScannerPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.scanner.should_render() {
            return;
        }

        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled(
            "ENTITY SCANNER ● ACTIVE",
            self.styles.title(),
        )));
        lines.push(Line::from(""));

        // A live snapshot always wins over the no-entity fallback content.
        match self.scanner.snapshot() {
            Some(info) if self.scanner.active() => {
                lines.push(self.field_line("Entity", info.entity.to_string()));
                lines.push(self.field_line("Hash", info.hash_str.clone()));
                lines.push(self.field_line("Type", info.entity_type.clone()));
                lines.push(self.field_line("Network ID", info.network_id.to_string()));
                lines.push(self.field_line("Coords", info.coords.display()));
                lines.push(self.field_line("Rotation", info.rotation.display()));
                lines.push(self.field_line("Heading", info.heading_display()));
            }
            _ => {
                lines.push(Line::from(Span::styled(
                    "No entity detected",
                    self.styles.disabled(),
                )));
                lines.push(Line::from(Span::styled(
                    "Aim at an object, ped, or vehicle",
                    self.styles.scanner_label(),
                )));
            }
        }

        lines.push(Line::from(""));
        let instructions = self.scanner.instructions();
        lines.push(Line::from(Span::styled(
            instructions.capture.clone(),
            self.styles.scanner_label(),
        )));
        lines.push(Line::from(Span::styled(
            instructions.cancel.clone(),
            self.styles.scanner_label(),
        )));

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Scanner"))
            .render(area, buf);
    }
}
