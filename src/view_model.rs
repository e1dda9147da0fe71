//! View Model
//!
//! Everything the page shows, derived from load state and filters.

use crate::config::{LOADING_MESSAGE, LOAD_FAILED_MESSAGE, NO_RESULTS_MESSAGE};
use crate::filter::{project, FilterState};
use crate::loader::LoadError;
use crate::models::{Item, Snapshot};
use crate::render::Card;

/// Lifecycle of the single snapshot load
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Pending,
    Ready(Snapshot),
    Failed,
}

impl LoadState {
    /// Settle the load. Failure is terminal and keeps no partial data.
    pub fn from_result(result: Result<Snapshot, LoadError>) -> Self {
        match result {
            Ok(snapshot) => LoadState::Ready(snapshot.prepared()),
            Err(_) => LoadState::Failed,
        }
    }

    pub fn items(&self) -> &[Item] {
        match self {
            LoadState::Ready(snapshot) => &snapshot.items,
            _ => &[],
        }
    }
}

/// Contents of the results container
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    Loading(&'static str),
    Failed(&'static str),
    Empty(&'static str),
    Cards(Vec<Card>),
}

pub fn results_view(load: &LoadState, filters: &FilterState, today: &str) -> ResultsView {
    match load {
        LoadState::Pending => ResultsView::Loading(LOADING_MESSAGE),
        LoadState::Failed => ResultsView::Failed(LOAD_FAILED_MESSAGE),
        LoadState::Ready(snapshot) => {
            let list = project(&snapshot.items, filters, today);
            if list.is_empty() {
                ResultsView::Empty(NO_RESULTS_MESSAGE)
            } else {
                ResultsView::Cards(list.iter().map(Card::from_item).collect())
            }
        }
    }
}

/// "Last updated" line; blank until a snapshot has loaded
pub fn status_line(load: &LoadState) -> String {
    match load {
        LoadState::Ready(snapshot) => format!(
            "마지막 업데이트: {} (총 {}건)",
            snapshot.generated_at,
            load.items().len()
        ),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Label;

    fn snapshot() -> Snapshot {
        let json = r#"{
            "generated_at": "2025-03-01T09:00:00+09:00",
            "items": [
                {"label": "FDA", "title": "jan", "link": "https://a.kr/1", "published": "2025-01-01T00:00:00Z"},
                {"label": "EMA", "title": "mar", "link": "https://b.kr/2", "published": "2025-03-01T00:00:00Z"},
                {"label": "FDA", "title": "feb", "link": "https://c.kr/3", "published": "2025-02-01T00:00:00Z"}
            ]
        }"#;
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_ready_state_renders_sorted_cards() {
        let load = LoadState::from_result(Ok(snapshot()));
        match results_view(&load, &FilterState::default(), "2025-03-01") {
            ResultsView::Cards(cards) => {
                let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
                assert_eq!(titles, vec!["mar", "feb", "jan"]);
                assert!(cards[0].badge_is_ema);
            }
            other => panic!("expected cards, got {:?}", other),
        }
        assert_eq!(status_line(&load), "마지막 업데이트: 2025-03-01T09:00:00+09:00 (총 3건)");
    }

    #[test]
    fn test_empty_result_is_distinct_from_pending() {
        let load = LoadState::from_result(Ok(snapshot()));
        let filters = FilterState { search: "nothing matches".to_string(), ..Default::default() };
        assert_eq!(results_view(&load, &filters, ""), ResultsView::Empty(NO_RESULTS_MESSAGE));

        let pending = LoadState::default();
        assert_eq!(results_view(&pending, &filters, ""), ResultsView::Loading(LOADING_MESSAGE));
        assert_eq!(status_line(&pending), "");
    }

    #[test]
    fn test_load_failure_shows_message_and_no_items() {
        let load = LoadState::from_result(Err(LoadError::Decode("expected value at line 1".to_string())));
        assert_eq!(load, LoadState::Failed);
        assert!(load.items().is_empty());
        assert_eq!(
            results_view(&load, &FilterState::default(), "2025-03-01"),
            ResultsView::Failed(LOAD_FAILED_MESSAGE)
        );
        assert_eq!(status_line(&load), "");
    }

    #[test]
    fn test_ready_state_parses_timestamps() {
        let load = LoadState::from_result(Ok(snapshot()));
        assert!(load.items().iter().all(|i| i.published_at.is_some()));
        assert_eq!(load.items()[0].label, Label::Fda);
    }
}
