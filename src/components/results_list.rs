//! Results List Component
//!
//! Renders the projection of the loaded snapshot under the current filters,
//! or the loading / failure / no-results message in its place.

use chrono::Utc;
use leptos::prelude::*;

use crate::components::ItemCard;
use crate::filter::today_in_reference_zone;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view_model::{results_view, ResultsView};

#[component]
pub fn ResultsList() -> impl IntoView {
    let store = use_app_store();

    // Recomputed from scratch whenever the snapshot or any filter changes
    let view_state = Memo::new(move |_| {
        let today = today_in_reference_zone(Utc::now());
        let load = store.load().read();
        let filters = store.filters().read();
        results_view(&load, &filters, &today)
    });

    view! {
        <section id="results" class="results">
            {move || match view_state.get() {
                ResultsView::Loading(msg) => view! { <p class="results-loading">{msg}</p> }.into_any(),
                ResultsView::Failed(msg) => view! { <p class="results-error">{msg}</p> }.into_any(),
                ResultsView::Empty(msg) => view! { <p class="results-empty">{msg}</p> }.into_any(),
                ResultsView::Cards(cards) => cards
                    .into_iter()
                    .map(|card| view! { <ItemCard card=card /> })
                    .collect_view()
                    .into_any(),
            }}
        </section>
    }
}
