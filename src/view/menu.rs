//! Menu pane widget.
//!
//! Renders the current menu: header with title and subtitle, the search
//! bar, and the filtered option list with the keyboard selection highlight.

use crate::model::{IconKind, MenuData, MenuOption};
use crate::state::FilterOutcome;
use crate::view::styles::OverlayStyles;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

/// Menu pane widget.
pub struct MenuPane<'a> {
    menu: Option<&'a MenuData>,
    outcome: &'a FilterOutcome,
    raw_query: &'a str,
    query_pending: bool,
    can_go_back: bool,
    selected: Option<usize>,
    styles: &'a OverlayStyles,
}

impl<'a> MenuPane<'a> {
    /// Create a new MenuPane widget.
    pub fn new(
        menu: Option<&'a MenuData>,
        outcome: &'a FilterOutcome,
        raw_query: &'a str,
        query_pending: bool,
        can_go_back: bool,
        selected: Option<usize>,
        styles: &'a OverlayStyles,
    ) -> Self {
        Self {
            menu,
            outcome,
            raw_query,
            query_pending,
            can_go_back,
            selected,
            styles,
        }
    }

    fn header_line(&self, menu: &MenuData) -> Line<'static> {
        let mut spans = Vec::new();
        if self.can_go_back {
            spans.push(Span::styled("◀ ".to_string(), self.styles.search()));
        }
        spans.push(Span::styled(menu.title.clone(), self.styles.title()));
        if let Some(subtitle) = &menu.subtitle {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(subtitle.clone(), self.styles.separator()));
        }
        Line::from(spans)
    }

    fn option_item(&self, option: &MenuOption) -> ListItem<'static> {
        if option.separator {
            return ListItem::new(Line::from(Span::styled(
                "─".repeat(24),
                self.styles.separator(),
            )));
        }

        let base = if option.disabled {
            self.styles.disabled()
        } else {
            self.styles.option()
        };

        let mut spans = Vec::new();
        if let Some(icon) = &option.icon {
            let glyph = match icon.kind {
                IconKind::Emoji | IconKind::Text => icon.glyph.clone(),
                // Named icons come from a web icon set; show a generic marker.
                IconKind::Named => "◆".to_string(),
            };
            spans.push(Span::styled(format!("{glyph} "), base));
        }
        spans.push(Span::styled(
            option.title.clone().unwrap_or_default(),
            base,
        ));
        if option.applied {
            spans.push(Span::styled(" ✓".to_string(), self.styles.applied()));
        }

        let mut lines = vec![Line::from(spans)];
        if let Some(description) = &option.description {
            lines.push(Line::from(Span::styled(
                format!("  {description}"),
                self.styles.separator(),
            )));
        }
        ListItem::new(lines)
    }
}

impl Widget for MenuPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(menu) = self.menu else {
            return;
        };

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let [header_area, search_area, list_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        Paragraph::new(self.header_line(menu)).render(header_area, buf);

        let search_label = if self.query_pending {
            format!("Search: {}▌", self.raw_query)
        } else {
            format!("Search: {}", self.raw_query)
        };
        Paragraph::new(Span::styled(search_label, self.styles.search()))
            .render(search_area, buf);

        match self.outcome {
            FilterOutcome::Options(options) => {
                let items: Vec<ListItem> =
                    options.iter().map(|option| self.option_item(option)).collect();
                let list = List::new(items)
                    .highlight_style(self.styles.selected())
                    .highlight_symbol("▸ ");

                let mut list_state = ListState::default();
                list_state.select(self.selected);
                StatefulWidget::render(list, list_area, buf, &mut list_state);
            }
            FilterOutcome::NoResults { query } => {
                let lines = vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        format!("No results found for \"{query}\""),
                        self.styles.disabled(),
                    )),
                ];
                Paragraph::new(lines).render(list_area, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn sample_menu() -> MenuData {
        MenuData {
            id: "root".to_string(),
            title: "Dev Tools".to_string(),
            subtitle: Some("v2".to_string()),
            options: vec![
                MenuOption {
                    id: "a".to_string(),
                    title: Some("Alpha".to_string()),
                    description: Some("First option".to_string()),
                    icon: None,
                    disabled: false,
                    applied: true,
                    separator: false,
                    data: None,
                },
                MenuOption {
                    id: "sep".to_string(),
                    title: None,
                    description: None,
                    icon: None,
                    disabled: false,
                    applied: false,
                    separator: true,
                    data: None,
                },
            ],
            search_index: None,
        }
    }

    fn render_to_text(menu: &MenuData, outcome: &FilterOutcome) -> String {
        let styles = OverlayStyles::new();
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal
            .draw(|frame| {
                let pane =
                    MenuPane::new(Some(menu), outcome, "", false, false, Some(0), &styles);
                frame.render_widget(pane, frame.area());
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
    fn renders_title_and_options() {
        let menu = sample_menu();
        let outcome = FilterOutcome::Options(menu.options.clone());
        let text = render_to_text(&menu, &outcome);
        assert!(text.contains("Dev Tools"));
        assert!(text.contains("Alpha"));
        assert!(text.contains("First option"));
    }

    #[test]
    fn renders_no_results_message_with_query() {
        let menu = sample_menu();
        let outcome = FilterOutcome::NoResults {
            query: "zzz".to_string(),
        };
        let text = render_to_text(&menu, &outcome);
        assert!(text.contains("No results found for \"zzz\""));
    }

    #[test]
    fn renders_nothing_without_a_menu() {
        let styles = OverlayStyles::new();
        let outcome = FilterOutcome::Options(Vec::new());
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        terminal
            .draw(|frame| {
                let pane = MenuPane::new(None, &outcome, "", false, false, None, &styles);
                frame.render_widget(pane, frame.area());
            })
            .unwrap();
        // Blank buffer, no border drawn.
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 0)].symbol(), " ");
    }
}
