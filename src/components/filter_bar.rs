//! Filter Bar Component
//!
//! Search box and the FDA / EMA / today-only toggles.
//! Every input writes straight into the store; the results list re-derives itself.

use leptos::prelude::*;

use crate::filter::FilterStateStoreFields;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="filters">
            <input
                id="search"
                type="search"
                placeholder="제목, 요약, 출처 검색..."
                autocomplete="off"
                prop:value=move || store.filters().search().get()
                on:input=move |ev| *store.filters().search().write() = event_target_value(&ev)
            />
            <label class="toggle">
                <input
                    id="filter-fda"
                    type="checkbox"
                    prop:checked=move || store.filters().show_fda().get()
                    on:change=move |ev| *store.filters().show_fda().write() = event_target_checked(&ev)
                />
                " FDA"
            </label>
            <label class="toggle">
                <input
                    id="filter-ema"
                    type="checkbox"
                    prop:checked=move || store.filters().show_ema().get()
                    on:change=move |ev| *store.filters().show_ema().write() = event_target_checked(&ev)
                />
                " EMA"
            </label>
            <label class="toggle">
                <input
                    id="filter-today"
                    type="checkbox"
                    prop:checked=move || store.filters().today_only().get()
                    on:change=move |ev| *store.filters().today_only().write() = event_target_checked(&ev)
                />
                " 오늘만"
            </label>
        </div>
    }
}
