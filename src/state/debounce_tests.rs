//! Tests for query debouncing.

use super::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn non_empty_query_is_not_applied_before_delay() {
    let t0 = Instant::now();
    let mut q = DebouncedQuery::new();
    q.set_raw("alp", t0);

    assert_eq!(q.raw(), "alp");
    assert_eq!(q.applied(), "");
    assert!(!q.tick(t0 + ms(149)));
    assert_eq!(q.applied(), "");
}

#[test]
fn non_empty_query_applies_after_150ms_quiescence() {
    let t0 = Instant::now();
    let mut q = DebouncedQuery::new();
    q.set_raw("alp", t0);

    assert!(q.tick(t0 + ms(150)));
    assert_eq!(q.applied(), "alp");
    assert!(!q.is_pending());
}

#[test]
fn each_keystroke_restarts_the_window() {
    let t0 = Instant::now();
    let mut q = DebouncedQuery::new();
    q.push_char('a', t0);
    q.push_char('l', t0 + ms(100));

    // 150ms after the first keystroke, but only 50ms after the second
    assert!(!q.tick(t0 + ms(150)));
    assert_eq!(q.applied(), "");

    assert!(q.tick(t0 + ms(250)));
    assert_eq!(q.applied(), "al");
}

#[test]
fn clearing_to_empty_applies_immediately() {
    let t0 = Instant::now();
    let mut q = DebouncedQuery::new();
    q.set_raw("alp", t0);
    q.tick(t0 + ms(150));
    assert_eq!(q.applied(), "alp");

    q.set_raw("", t0 + ms(200));
    assert_eq!(q.applied(), "");
    assert!(!q.is_pending());
}

#[test]
fn whitespace_only_counts_as_empty_for_immediate_application() {
    let t0 = Instant::now();
    let mut q = DebouncedQuery::new();
    q.set_raw("alp", t0);
    q.tick(t0 + ms(150));

    q.set_raw("   ", t0 + ms(200));
    assert_eq!(q.applied(), "   ");
    assert!(!q.is_pending());
}

#[test]
fn pop_char_to_empty_bypasses_debounce() {
    let t0 = Instant::now();
    let mut q = DebouncedQuery::new();
    q.push_char('a', t0);
    q.pop_char(t0 + ms(10));

    assert_eq!(q.raw(), "");
    assert_eq!(q.applied(), "");
    assert!(!q.is_pending());
}

#[test]
fn tick_without_pending_deadline_reports_no_change() {
    let t0 = Instant::now();
    let mut q = DebouncedQuery::new();
    assert!(!q.tick(t0));
    assert!(!q.tick(t0 + ms(1000)));
}

#[test]
fn tick_is_idempotent_after_firing() {
    let t0 = Instant::now();
    let mut q = DebouncedQuery::new();
    q.set_raw("x", t0);

    assert!(q.tick(t0 + ms(150)));
    assert!(!q.tick(t0 + ms(300)));
}

#[test]
fn next_deadline_exposes_pending_instant() {
    let t0 = Instant::now();
    let mut q = DebouncedQuery::new();
    assert!(q.next_deadline().is_none());

    q.set_raw("x", t0);
    assert_eq!(q.next_deadline(), Some(t0 + DEBOUNCE_DELAY));
}
