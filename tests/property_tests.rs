//! Property-based tests for the state machine invariants.
//!
//! Tests validate:
//! 1. Navigation history is strictly LIFO
//! 2. Root search results are capped and title-unique
//! 3. Category results exclude separators for any query
//! 4. Blank queries are identity filters
//! 5. Debounce only applies after its delay

use hudlink::model::{Icon, IconKind, MenuData};
use hudlink::state::{filter_options, DebouncedQuery, NavigationState, DEBOUNCE_DELAY};
use proptest::prelude::*;
use std::time::{Duration, Instant};

fn make_menu(id: String) -> MenuData {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": "Menu",
        "options": [
            {"id": "a", "title": "Alpha"},
            {"id": "sep", "separator": true},
            {"id": "b", "title": "Beta"},
        ]
    }))
    .unwrap()
}

fn make_indexed_menu(count: usize) -> MenuData {
    let entries: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "id": format!("item_{i}"),
                "title": format!("Item {i}"),
                "description": "indexed",
                "category": "cat",
                "categoryLabel": "Category",
                "searchTerms": "match",
            })
        })
        .collect();
    serde_json::from_value(serde_json::json!({
        "id": "root",
        "title": "Root",
        "options": [],
        "searchData": entries,
    }))
    .unwrap()
}

// ===== Property 1: Navigation LIFO =====

proptest! {
    #[test]
    fn navigation_go_back_is_lifo(ids in prop::collection::vec("[a-z]{1,8}", 1..12)) {
        let mut nav = NavigationState::new();
        nav.show(Some(make_menu("root".to_string())));

        for id in &ids {
            nav.navigate_to(Some(make_menu(id.clone())));
        }

        // Unwinding visits the pushed menus in exact reverse order.
        for expected in ids.iter().rev().skip(1) {
            let closed = nav.go_back();
            prop_assert!(!closed);
            prop_assert_eq!(&nav.current().unwrap().id, expected);
        }
        let closed = nav.go_back();
        prop_assert!(!closed);
        prop_assert_eq!(&nav.current().unwrap().id, "root");

        // One more pop exhausts history and closes.
        let closed = nav.go_back();
        prop_assert!(closed);
        prop_assert!(!nav.visible());
    }
}

// ===== Property 2: Root search cap and uniqueness =====

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]
    #[test]
    fn root_search_capped_and_unique(count in 0usize..80) {
        let menu = make_indexed_menu(count);
        let outcome = filter_options(&menu, "match", false);
        let options = outcome.options();

        prop_assert!(options.len() <= 30);

        let mut titles: Vec<String> = options
            .iter()
            .filter_map(|o| o.title.clone())
            .map(|t| t.to_lowercase())
            .collect();
        titles.sort();
        titles.dedup();
        prop_assert_eq!(titles.len(), options.len());
    }
}

// ===== Property 3: Category results exclude separators =====

proptest! {
    #[test]
    fn category_results_exclude_separators(query in "[a-zA-Z]{1,10}") {
        let menu = make_menu("m".to_string());
        let outcome = filter_options(&menu, &query, true);
        for option in outcome.options() {
            prop_assert!(!option.separator);
        }
    }
}

// ===== Property 4: Blank queries are identity =====

proptest! {
    #[test]
    fn blank_query_is_identity(query in "[ \t]{0,6}") {
        let menu = make_menu("m".to_string());
        let outcome = filter_options(&menu, &query, false);
        prop_assert_eq!(outcome.options(), &menu.options[..]);
    }
}

// ===== Property 5: Debounce timing =====

proptest! {
    #[test]
    fn debounce_applies_only_after_delay(text in "[a-z]{1,10}", early_ms in 0u64..150) {
        let t0 = Instant::now();
        let mut query = DebouncedQuery::new();
        query.set_raw(text.clone(), t0);

        // Still pending before the delay elapses.
        query.tick(t0 + Duration::from_millis(early_ms));
        prop_assert_eq!(query.applied(), "");

        // Applied exactly at the deadline.
        query.tick(t0 + DEBOUNCE_DELAY);
        prop_assert_eq!(query.applied(), text.as_str());
    }
}

// ===== Icon classification =====

proptest! {
    #[test]
    fn fa_prefixed_icons_are_named(suffix in "[a-z-]{1,12}") {
        let icon = Icon::classify(format!("fa-{suffix}"));
        prop_assert_eq!(icon.kind, IconKind::Named);
    }
}
