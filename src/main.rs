//! Grocery List Entry Point

mod app;
mod components;
mod models;
mod repository;
mod status;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
