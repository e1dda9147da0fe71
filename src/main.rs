//! Regulatory Watch Frontend Entry Point

mod app;
mod components;
mod config;
mod filter;
mod loader;
mod models;
mod render;
mod store;
mod view_model;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
