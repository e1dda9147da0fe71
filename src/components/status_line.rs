//! Status Line Component
//!
//! "Last updated" line above the results.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::view_model::status_line;

#[component]
pub fn StatusLine() -> impl IntoView {
    let store = use_app_store();

    view! {
        <p id="last-updated" class="last-updated">
            {move || status_line(&store.load().read())}
        </p>
    }
}
