//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Provided once by `App` and read by components through context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::FilterState;
use crate::loader::LoadError;
use crate::models::Snapshot;
use crate::view_model::LoadState;

/// Shared state: the loaded snapshot and the filter controls
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Snapshot lifecycle (pending until the startup fetch settles)
    pub load: LoadState,
    /// Current filter controls
    pub filters: FilterState,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Record the outcome of the startup load
pub fn store_finish_load(store: &AppStore, result: Result<Snapshot, LoadError>) {
    *store.load().write() = LoadState::from_result(result);
}
