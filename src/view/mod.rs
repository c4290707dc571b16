//! TUI rendering and terminal management (impure shell).

mod menu;
mod notification;
mod scanner;
mod styles;

pub use menu::MenuPane;
pub use notification::NotificationView;
pub use scanner::ScannerPanel;
pub use styles::{ColorConfig, OverlayStyles};

use crate::config::ResolvedConfig;
use crate::integration;
use crate::model::AppError;
use crate::report::clipboard::{copy_with_fallback, Osc52Clipboard, SystemClipboard};
use crate::report::{HostLink, JsonLinesLink, Report, Reporter};
use crate::source::InputSource;
use crate::state::{apply_message, Effect, FilterOutcome, OverlayState};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::layout::{Constraint, Layout};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{File, OpenOptions};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, warn};

/// Cadence for polling the command source when no timer is pending.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] crate::model::InputError),
}

impl From<TuiError> for AppError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Io(e) => AppError::Terminal(e),
            TuiError::Input(e) => AppError::InputRead(e),
        }
    }
}

/// Main TUI application.
///
/// Generic over the terminal backend and report transport to support
/// testing with `TestBackend` and an in-memory link.
pub struct TuiApp<B, L>
where
    B: ratatui::backend::Backend,
    L: HostLink,
{
    terminal: Terminal<B>,
    state: OverlayState,
    input_source: InputSource,
    line_counter: usize,
    selected: usize,
    reporter: Reporter<L>,
    styles: OverlayStyles,
}

/// Set up the terminal, run the overlay against the given source, and
/// restore the terminal even when the loop errors out.
pub fn run_with_source(
    input_source: InputSource,
    config: &ResolvedConfig,
    no_color: bool,
) -> Result<(), TuiError> {
    if let Some(parent) = config.report_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let report_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.report_path)?;
    let link = JsonLinesLink::new(config.resource.clone(), report_file);

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;

    let mut app: TuiApp<CrosstermBackend<Stdout>, JsonLinesLink<File>> = TuiApp::with_terminal(
        terminal,
        input_source,
        Reporter::new(link),
        OverlayStyles::with_color_config(ColorConfig::from_env_and_args(no_color)),
    );

    let result = app.run();
    restore_terminal()?;
    result
}

/// Restore terminal to normal state.
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

impl<B, L> TuiApp<B, L>
where
    B: ratatui::backend::Backend,
    L: HostLink,
{
    /// Build an application over an already-initialized terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        input_source: InputSource,
        reporter: Reporter<L>,
        styles: OverlayStyles,
    ) -> Self {
        Self {
            terminal,
            state: OverlayState::new(),
            input_source,
            line_counter: 0,
            selected: 0,
            reporter,
            styles,
        }
    }

    /// Run the main event loop.
    ///
    /// Returns when the user quits (Ctrl+C, or `q` with no menu open).
    /// Event-driven: the poll timeout is the earliest pending state timer,
    /// capped at the input polling cadence, so debounce and notification
    /// deadlines fire on time while idle CPU stays minimal.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let timeout = self.poll_timeout(Instant::now());

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.clamp_selection();
                        self.draw()?;
                        continue;
                    }
                    Event::Resize(_, _) => {
                        self.draw()?;
                        continue;
                    }
                    _ => {}
                }
            }

            // Timer elapsed (or an uninteresting event) - poll the command
            // source and advance cooperative timers.
            let had_messages = self.poll_input()?;
            let timers_changed = self.state.tick(Instant::now());

            if had_messages || timers_changed {
                self.clamp_selection();
                self.draw()?;
            }
        }
    }

    fn poll_timeout(&self, now: Instant) -> Duration {
        match self.state.next_deadline() {
            Some(deadline) => deadline
                .saturating_duration_since(now)
                .min(INPUT_POLL_INTERVAL),
            None => INPUT_POLL_INTERVAL,
        }
    }

    /// Poll the command source and apply every new message.
    ///
    /// Returns `true` when at least one message was applied.
    fn poll_input(&mut self) -> Result<bool, TuiError> {
        let lines = self.input_source.poll()?;
        if lines.is_empty() {
            return Ok(false);
        }

        let count = lines.len();
        let (messages, errors) = integration::process_lines(lines, self.line_counter + 1);
        self.line_counter += count;

        for error in &errors {
            warn!("Parse error at line {}: {}", error.line(), error);
        }

        let had_messages = !messages.is_empty();
        let now = Instant::now();
        for message in messages {
            debug!(?message, "Applying host message");
            let effects = apply_message(&mut self.state, message, now);
            self.perform_effects(effects);
        }

        Ok(had_messages)
    }

    /// Handle a single keyboard event. Returns `true` if the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let now = Instant::now();

        // Ctrl+C always quits.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        match key.code {
            KeyCode::Esc => {
                let reports = self.state.user_escape(now);
                self.send_reports(reports);
            }
            KeyCode::Enter => self.select_current(),
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Left => {
                if self.state.nav.visible() {
                    let reports = self.state.user_back(now);
                    self.send_reports(reports);
                }
            }
            KeyCode::Backspace => {
                if self.state.query.raw().is_empty() {
                    if self.state.nav.visible() {
                        let reports = self.state.user_back(now);
                        self.send_reports(reports);
                    }
                } else {
                    self.state.search_backspace(now);
                }
            }
            KeyCode::Delete => self.state.notices.dismiss(now),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.state.nav.visible() {
                    self.state.search_input(ch, now);
                } else if ch == 'q' {
                    return true;
                }
            }
            _ => {}
        }

        false
    }

    fn select_current(&mut self) {
        let option = match self.state.visible_options() {
            FilterOutcome::Options(options) => options.get(self.selected).cloned(),
            FilterOutcome::NoResults { .. } => None,
        };
        let Some(option) = option else { return };

        if let Some(report) = self.state.select_option(&option) {
            self.reporter.send(&report);
        }
    }

    /// Move the keyboard selection, skipping separators and disabled rows.
    fn move_selection(&mut self, delta: i64) {
        let outcome = self.state.visible_options();
        let options = outcome.options();
        if options.is_empty() {
            return;
        }

        let mut index = self.selected as i64;
        loop {
            index += delta;
            if index < 0 || index >= options.len() as i64 {
                return;
            }
            if options[index as usize].selectable() {
                self.selected = index as usize;
                return;
            }
        }
    }

    /// Keep the selection on a selectable row after the list changed.
    fn clamp_selection(&mut self) {
        let outcome = self.state.visible_options();
        let options = outcome.options();

        let valid = options
            .get(self.selected)
            .is_some_and(|option| option.selectable());
        if valid {
            return;
        }

        self.selected = options
            .iter()
            .position(|option| option.selectable())
            .unwrap_or(0);
    }

    fn send_reports(&mut self, reports: Vec<Report>) {
        for report in reports {
            self.reporter.send(&report);
        }
    }

    fn perform_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Send(report) => self.reporter.send(&report),
                Effect::Copy { text, description } => {
                    let mut primary = SystemClipboard;
                    let mut fallback = Osc52Clipboard::new(io::stdout());
                    let success = copy_with_fallback(&mut primary, &mut fallback, &text);
                    self.reporter.send(&Report::ClipboardResult {
                        success,
                        description,
                    });
                }
            }
        }
    }

    /// Render the whole overlay.
    fn draw(&mut self) -> Result<(), TuiError> {
        let outcome = self.state.visible_options();
        let menu_visible = self.state.nav.visible();

        let menu = self.state.nav.current().cloned();
        let raw_query = self.state.query.raw().to_string();
        let query_pending = self.state.query.is_pending();
        let can_go_back = self.state.nav.can_go_back();
        let selected = if menu_visible { Some(self.selected) } else { None };
        let scanner = self.state.scanner.clone();
        let notice = self.state.notices.current().cloned();
        let styles = &self.styles;

        self.terminal.draw(|frame| {
            let [main_area, side_area] =
                Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .areas(frame.area());

            if menu_visible {
                let pane = MenuPane::new(
                    menu.as_ref(),
                    &outcome,
                    &raw_query,
                    query_pending,
                    can_go_back,
                    selected,
                    styles,
                );
                frame.render_widget(pane, main_area);
            }

            let [scanner_area, notice_area] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(6)]).areas(side_area);

            frame.render_widget(ScannerPanel::new(&scanner, styles), scanner_area);

            if let Some(notice) = &notice {
                frame.render_widget(NotificationView::new(notice, styles), notice_area);
            }
        })?;

        Ok(())
    }
}
