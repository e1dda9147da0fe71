//! Regulatory Watch Frontend App
//!
//! Page layout plus the one-shot snapshot load.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{FilterBar, ResultsList, StatusLine};
use crate::loader;
use crate::store::{store_finish_load, AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::default());
    provide_context(store);

    // Filters are live immediately and operate on an empty list until this settles
    spawn_local(async move {
        let result = loader::load_snapshot().await;
        match &result {
            Ok(snapshot) => {
                web_sys::console::log_1(
                    &format!("[APP] Loaded snapshot {} with {} items", snapshot.generated_at, snapshot.items.len()).into(),
                );
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[APP] Snapshot load failed: {}", e).into());
            }
        }
        store_finish_load(&store, result);
    });

    view! {
        <main class="container">
            <header class="page-header">
                <h1>"FDA · EMA 승인 뉴스"</h1>
                <StatusLine />
            </header>

            <FilterBar />

            <ResultsList />
        </main>
    }
}
