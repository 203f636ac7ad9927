//! # freegpt
//!
//! Leptos + WASM chat panel that talks to a remote text-generation endpoint.
//!
//! The conversation state machine, completion client, and persistence adapter
//! are plain Rust and run natively in tests. Browser glue (localStorage,
//! fullscreen, timers, mounting) sits behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// Browser entry point: install the panic hook and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
