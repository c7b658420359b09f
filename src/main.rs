//! BoardBased Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod csv;
mod latest;
mod models;
mod search;
mod store;
mod text;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
