//! # client
//!
//! Leptos + WASM frontend for the bookkee ledger: login, dashboard, and the
//! add-entry form. Route authorization is delegated to the `gate` crate;
//! this crate supplies the browser flag store, the pages, and the calls to
//! the hosted identity and document provider.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic and log hooks, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
