//! Filter and Sort
//!
//! Pure projection of the loaded items under the current filter state.
//! Nothing here touches the DOM, so it runs the same under `cargo test`.

use chrono::{DateTime, Utc};
use reactive_stores::Store;
use std::cmp::Reverse;

use crate::config::reference_offset;
use crate::models::{Item, Label};

/// UI-owned filter controls
#[derive(Clone, Debug, PartialEq, Store)]
pub struct FilterState {
    pub search: String,
    pub show_fda: bool,
    pub show_ema: bool,
    pub today_only: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            show_fda: true,
            show_ema: true,
            today_only: false,
        }
    }
}

impl FilterState {
    fn shows(&self, label: Label) -> bool {
        match label {
            Label::Fda => self.show_fda,
            Label::Ema => self.show_ema,
        }
    }
}

/// Calendar date (YYYY-MM-DD) of `now` in the reference timezone
pub fn today_in_reference_zone(now: DateTime<Utc>) -> String {
    now.with_timezone(&reference_offset()).format("%Y-%m-%d").to_string()
}

/// Case-insensitive match of `query` against title, summary and source.
///
/// `query` is expected lowercased and trimmed.
fn matches_search(item: &Item, query: &str) -> bool {
    let haystack = format!(
        "{} {} {}",
        item.title,
        item.summary.as_deref().unwrap_or(""),
        item.source.as_deref().unwrap_or("")
    );
    haystack.to_lowercase().contains(query)
}

/// Filter and order `items` for display, most recent first.
///
/// The today-only check compares the first ten characters of `published`
/// with `today` verbatim. Item dates are trusted to already be in the
/// reference timezone and are never re-derived.
pub fn project(items: &[Item], filters: &FilterState, today: &str) -> Vec<Item> {
    let query = filters.search.trim().to_lowercase();

    let mut list: Vec<Item> = items
        .iter()
        .filter(|item| !filters.today_only || item.published_date() == Some(today))
        .filter(|item| filters.shows(item.label))
        .filter(|item| query.is_empty() || matches_search(item, &query))
        .cloned()
        .collect();

    // Stable: equal timestamps keep snapshot order, unparseable ones go last
    list.sort_by_key(|item| Reverse(item.published_at));
    list
}
