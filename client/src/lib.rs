//! # client
//!
//! Leptos + WASM storefront with a session-scoped shopping cart.
//!
//! Cart semantics live in the `cart` crate; this crate supplies the browser
//! `sessionStorage` backend, the Leptos components that render the cart
//! view, and the window listeners that feed page events into it.

pub mod app;
pub mod catalog;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
