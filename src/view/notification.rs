//! Notification widget.
//!
//! Renders the single live notification with its severity glyph, message
//! body, and countdown gauge. The entering and exiting phases are dimmed to
//! stand in for the host UI's slide animations.

use crate::state::{ActiveNotice, NoticePhase};
use crate::view::styles::OverlayStyles;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

/// Notification widget.
pub struct NotificationView<'a> {
    notice: &'a ActiveNotice,
    styles: &'a OverlayStyles,
}

impl<'a> NotificationView<'a> {
    /// Create a new NotificationView widget.
    pub fn new(notice: &'a ActiveNotice, styles: &'a OverlayStyles) -> Self {
        Self { notice, styles }
    }
}

impl Widget for NotificationView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let data = self.notice.data();
        let mut kind_style = self.styles.notice(data.kind);
        if self.notice.phase() != NoticePhase::Visible {
            kind_style = kind_style.add_modifier(Modifier::DIM);
        }

        let block = Block::default().borders(Borders::ALL).border_style(kind_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let [text_area, gauge_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{} ", data.kind.glyph()), kind_style),
                Span::styled(data.title.clone(), self.styles.title()),
            ]),
            Line::from(Span::raw(data.message.clone())),
        ];
        Paragraph::new(lines).render(text_area, buf);

        let ratio = (self.notice.progress() / 100.0).clamp(0.0, 1.0);
        Gauge::default()
            .gauge_style(kind_style)
            .ratio(ratio)
            .label("")
            .render(gauge_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NotificationData;
    use crate::state::NotificationQueue;
    use std::time::Instant;

    fn render_to_text(notice: &ActiveNotice) -> String {
        let styles = OverlayStyles::new();
        let mut terminal =
            ratatui::Terminal::new(ratatui::backend::TestBackend::new(40, 6)).unwrap();
        terminal
            .draw(|frame| {
                let view = NotificationView::new(notice, &styles);
                frame.render_widget(view, frame.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn renders_title_message_and_glyph() {
        let mut queue = NotificationQueue::new();
        queue.enqueue(
            NotificationData {
                title: "Saved".to_string(),
                message: "Outfit applied".to_string(),
                kind: crate::model::NotificationKind::Success,
                duration_ms: 5000,
            },
            Instant::now(),
        );
        let text = render_to_text(queue.current().unwrap());
        assert!(text.contains("Saved"));
        assert!(text.contains("Outfit applied"));
        assert!(text.contains('✓'));
    }
}
