//! # client
//!
//! Leptos + WASM chat widget for the crosstalk relay. Opens a single
//! websocket to the serving host, renders incoming messages into a
//! scrolling log, and forwards user-typed text to the relay.
//!
//! This crate contains the root component, the chat widget, application
//! state, and the websocket client. Browser-only code is gated behind the
//! `csr` feature so the state layer stays testable on the host.

pub mod app;
pub mod components;
pub mod net;
pub mod state;

/// Client-side entry point: mount the widget into the host page body.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
