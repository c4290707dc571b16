//! Search / filter engine.
//!
//! A pure function of (active menu, query, mode) producing the displayed
//! option list. Two modes:
//!
//! - **Root**: the menu is at the top of the stack (no back path) and carries
//!   a flat cross-category search index. Matches are deduplicated by title
//!   and capped.
//! - **Category**: filtering a single menu's own option list.
//!
//! Debouncing of the raw query lives in [`crate::state::debounce`]; this
//! module only sees the applied query.

use crate::model::{Icon, MenuData, MenuOption, SearchIndexEntry};
use std::collections::HashSet;

/// Maximum number of materialized results in root mode.
pub const MAX_ROOT_RESULTS: usize = 30;

// ===== SearchMode =====

/// Which search algorithm applies to the active menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Cross-category index search (top-level menu with an index).
    Root,
    /// Filter over the current menu's own options.
    Category,
}

/// Determine the search mode for a menu.
///
/// Root mode requires both: no back path exists AND the menu carries a
/// search index. Everything else is category mode.
pub fn search_mode(menu: &MenuData, can_go_back: bool) -> SearchMode {
    if !can_go_back && menu.search_index.is_some() {
        SearchMode::Root
    } else {
        SearchMode::Category
    }
}

// ===== FilterOutcome =====

/// Result of filtering a menu against a query.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
    /// Options to display, in order.
    Options(Vec<MenuOption>),
    /// Non-empty query matched nothing; display a "no results" state
    /// instead of a bare empty list.
    NoResults {
        /// The query as the user typed it (untrimmed display form).
        query: String,
    },
}

impl FilterOutcome {
    /// The displayed options, empty for the no-results state.
    pub fn options(&self) -> &[MenuOption] {
        match self {
            FilterOutcome::Options(options) => options,
            FilterOutcome::NoResults { .. } => &[],
        }
    }
}

// ===== Filtering =====

/// Filter a menu's displayed options against an applied query.
///
/// An empty or whitespace-only query returns the original option list
/// unmodified, separators included, in either mode.
pub fn filter_options(menu: &MenuData, query: &str, can_go_back: bool) -> FilterOutcome {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return FilterOutcome::Options(menu.options.clone());
    }

    let folded = trimmed.to_lowercase();
    let matched = match search_mode(menu, can_go_back) {
        SearchMode::Root => {
            // search_mode only returns Root when the index is present
            let index = menu.search_index.as_deref().unwrap_or_default();
            root_search(index, &folded)
        }
        SearchMode::Category => category_filter(&menu.options, &folded),
    };

    if matched.is_empty() {
        FilterOutcome::NoResults {
            query: query.to_string(),
        }
    } else {
        FilterOutcome::Options(matched)
    }
}

/// Root-mode search over the flat index.
///
/// Case-insensitive substring containment against searchTerms, title, and
/// description; deduplicated by case-insensitive title keeping the first
/// occurrence in index order; capped at [`MAX_ROOT_RESULTS`].
fn root_search(index: &[SearchIndexEntry], folded_query: &str) -> Vec<MenuOption> {
    let mut seen_titles: HashSet<String> = HashSet::new();

    index
        .iter()
        .filter(|item| {
            item.search_terms.to_lowercase().contains(folded_query)
                || item.title.to_lowercase().contains(folded_query)
                || item.description.to_lowercase().contains(folded_query)
        })
        .filter(|item| seen_titles.insert(item.title.to_lowercase()))
        .take(MAX_ROOT_RESULTS)
        .map(materialize)
        .collect()
}

/// Convert an index item into a display option, rewriting the description to
/// point at the source category.
fn materialize(item: &SearchIndexEntry) -> MenuOption {
    MenuOption {
        id: item.id.clone(),
        title: Some(item.title.clone()),
        description: Some(format!("{} → {}", item.description, item.category_label)),
        icon: item.icon.as_deref().map(Icon::classify),
        disabled: false,
        applied: false,
        separator: false,
        data: Some(serde_json::json!({ "category": item.category })),
    }
}

/// Category-mode filter over a menu's own options.
///
/// Separators are excluded unconditionally; an option survives iff its
/// title, description, or id contains the folded query.
fn category_filter(options: &[MenuOption], folded_query: &str) -> Vec<MenuOption> {
    options
        .iter()
        .filter(|option| !option.separator)
        .filter(|option| {
            let title_hit = option
                .title
                .as_deref()
                .is_some_and(|t| t.to_lowercase().contains(folded_query));
            let desc_hit = option
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(folded_query));
            title_hit || desc_hit || option.id.to_lowercase().contains(folded_query)
        })
        .cloned()
        .collect()
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
