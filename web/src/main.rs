//! Bookhaven reading platform - Leptos browser client entry point.
//!
//! The whole application runs client side; the backend API and the
//! live-update websocket are consumed, not implemented here.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Bookhaven web client starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
