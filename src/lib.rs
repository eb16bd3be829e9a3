// lib.rs - Root module for the attendee_admin library
//
// The web application lives in web_app; fixtures holds the canned events
// API data used by the tests and the stub server.

pub mod fixtures;
pub mod web_app;

/// Hydration entry point for the WASM client
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
