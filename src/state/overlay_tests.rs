//! Tests for the root overlay state.

use super::*;
use crate::model::menu::SearchIndexEntry;
use crate::state::debounce::DEBOUNCE_DELAY;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn option(id: &str, title: &str) -> MenuOption {
    MenuOption {
        id: id.to_string(),
        title: Some(title.to_string()),
        description: None,
        icon: None,
        disabled: false,
        applied: false,
        separator: false,
        data: None,
    }
}

fn menu(id: &str, options: Vec<MenuOption>) -> MenuData {
    MenuData {
        id: id.to_string(),
        title: id.to_uppercase(),
        subtitle: None,
        options,
        search_index: None,
    }
}

// ===== Selection =====

#[test]
fn selecting_an_option_reports_with_menu_id() {
    let t0 = Instant::now();
    let mut state = OverlayState::new();
    state.show_menu(Some(menu("main", vec![option("a", "Alpha")])), t0);

    let report = state.select_option(&option("a", "Alpha")).unwrap();
    match report {
        Report::OptionSelected {
            option_id, menu_id, ..
        } => {
            assert_eq!(option_id, "a");
            assert_eq!(menu_id.as_deref(), Some("main"));
        }
        other => panic!("Expected OptionSelected, got {other:?}"),
    }
}

#[test]
fn selecting_disabled_option_emits_nothing() {
    let state = OverlayState::new();
    let mut disabled = option("a", "Alpha");
    disabled.disabled = true;
    assert!(state.select_option(&disabled).is_none());
}

#[test]
fn selecting_a_separator_emits_nothing() {
    let state = OverlayState::new();
    let mut sep = option("sep", "");
    sep.title = None;
    sep.separator = true;
    assert!(state.select_option(&sep).is_none());
}

// ===== Back / close reporting =====

#[test]
fn user_back_reports_back_unconditionally() {
    let t0 = Instant::now();
    let mut state = OverlayState::new();
    state.show_menu(Some(menu("root", vec![])), t0);
    state.navigate_to(Some(menu("sub", vec![])), t0);

    let reports = state.user_back(t0);
    assert_eq!(reports, vec![Report::Back]);
}

#[test]
fn user_back_with_empty_history_also_reports_close() {
    let t0 = Instant::now();
    let mut state = OverlayState::new();
    state.show_menu(Some(menu("root", vec![])), t0);

    let reports = state.user_back(t0);
    assert_eq!(reports, vec![Report::Back, Report::Closed]);
    assert!(!state.nav.visible());
}

#[test]
fn escape_reports_exactly_one_close() {
    let t0 = Instant::now();
    let mut state = OverlayState::new();
    state.show_menu(Some(menu("root", vec![])), t0);

    assert_eq!(state.user_escape(t0), vec![Report::Closed]);
    // Second escape: already closed, no duplicate report
    assert!(state.user_escape(t0).is_empty());
}

#[test]
fn host_close_reports_once_per_transition() {
    let t0 = Instant::now();
    let mut state = OverlayState::new();
    state.show_menu(Some(menu("root", vec![])), t0);

    assert_eq!(state.host_close(t0), vec![Report::Closed]);
    assert!(state.host_close(t0).is_empty());
}

// ===== Query lifecycle across navigation =====

#[test]
fn entering_a_submenu_clears_the_query() {
    let t0 = Instant::now();
    let mut state = OverlayState::new();
    state.show_menu(Some(menu("root", vec![option("a", "Alpha")])), t0);

    state.search_input('a', t0);
    state.query.tick(t0 + ms(150));
    assert_eq!(state.query.applied(), "a");

    state.navigate_to(Some(menu("sub", vec![])), t0 + ms(200));
    assert_eq!(state.query.raw(), "");
    assert_eq!(state.query.applied(), "");
}

#[test]
fn returning_to_root_keeps_the_query_empty_but_unclobbered() {
    let t0 = Instant::now();
    let mut state = OverlayState::new();
    state.show_menu(Some(menu("root", vec![])), t0);
    state.navigate_to(Some(menu("sub", vec![])), t0);
    state.user_back(t0 + ms(10));

    // Back at the root; the user may type again
    state.search_input('x', t0 + ms(20));
    assert!(state.query.tick(t0 + ms(170)));
    assert_eq!(state.query.applied(), "x");
}

#[test]
fn closing_clears_the_query() {
    let t0 = Instant::now();
    let mut state = OverlayState::new();
    state.show_menu(Some(menu("root", vec![])), t0);
    state.search_input('x', t0);

    state.user_escape(t0 + ms(10));
    assert_eq!(state.query.raw(), "");
}

// ===== Derived display =====

#[test]
fn visible_options_is_empty_when_no_menu() {
    let state = OverlayState::new();
    assert_eq!(state.visible_options(), FilterOutcome::Options(Vec::new()));
}

#[test]
fn visible_options_filters_by_applied_query() {
    let t0 = Instant::now();
    let mut state = OverlayState::new();
    state.show_menu(
        Some(menu("root", vec![option("a", "Alpha"), option("b", "Beta")])),
        t0,
    );

    state.search_input('b', t0);
    state.search_input('e', t0 + ms(10));
    // Not applied yet: full list
    assert_eq!(state.visible_options().options().len(), 2);

    state.tick(t0 + ms(160));
    let outcome = state.visible_options();
    assert_eq!(outcome.options().len(), 1);
    assert_eq!(outcome.options()[0].id, "b");
}

#[test]
fn visible_options_uses_root_mode_on_indexed_top_menu() {
    let t0 = Instant::now();
    let mut state = OverlayState::new();
    let mut root = menu("root", vec![option("local", "Local")]);
    root.search_index = Some(vec![SearchIndexEntry {
        id: "indexed".to_string(),
        title: "Indexed".to_string(),
        description: "from index".to_string(),
        category: "cat".to_string(),
        category_label: "Cat".to_string(),
        icon: None,
        search_terms: "indexed".to_string(),
    }]);
    state.show_menu(Some(root), t0);

    state.query.set_raw("indexed", t0);
    state.tick(t0 + ms(150));
    let outcome = state.visible_options();
    assert_eq!(outcome.options().len(), 1);
    assert_eq!(outcome.options()[0].id, "indexed");
}

// ===== Timers =====

#[test]
fn next_deadline_merges_query_and_notice_deadlines() {
    let t0 = Instant::now();
    let mut state = OverlayState::new();
    assert!(state.next_deadline().is_none());

    state.query.set_raw("q", t0);
    let query_deadline = state.next_deadline().unwrap();
    assert_eq!(query_deadline, t0 + DEBOUNCE_DELAY);

    state.notices.enqueue(
        crate::model::NotificationData {
            title: "T".to_string(),
            message: "M".to_string(),
            kind: crate::model::NotificationKind::Info,
            duration_ms: 5000,
        },
        t0,
    );
    // Notice entrance (10ms) is sooner than the debounce (150ms)
    assert!(state.next_deadline().unwrap() < query_deadline);
}
