//! Snapshot Loader
//!
//! One-shot fetch of the collector output. Runs once at startup.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

use crate::config::SNAPSHOT_PATH;
use crate::models::Snapshot;

/// Why the snapshot could not be used. All variants end the session the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected HTTP status {0}")]
    Status(u16),
    #[error("Malformed snapshot: {0}")]
    Decode(String),
}

fn js_message(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Fetch `./data/latest.json`, bypassing the browser cache
pub async fn load_snapshot() -> Result<Snapshot, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Network("no window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_cache(RequestCache::NoStore);
    let request = Request::new_with_str_and_init(SNAPSHOT_PATH, &opts)
        .map_err(|e| LoadError::Network(js_message(e)))?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| LoadError::Network(js_message(e)))?
        .dyn_into()
        .map_err(|e| LoadError::Network(js_message(e)))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let body = response.json().map_err(|e| LoadError::Decode(js_message(e)))?;
    let value = JsFuture::from(body)
        .await
        .map_err(|e| LoadError::Decode(js_message(e)))?;

    serde_wasm_bindgen::from_value(value).map_err(|e| LoadError::Decode(e.to_string()))
}
