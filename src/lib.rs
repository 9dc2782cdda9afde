//! # fluxvision-web
//!
//! Leptos + WASM frontend for FluxVision, a financial tracker for
//! ride-hailing and delivery drivers: income/expense transactions,
//! categories, per-platform earnings (R$/km), and a trends dashboard.
//!
//! This crate is a thin client over the FluxVision REST API. It contains
//! pages, components, application state, the wire types, and the HTTP
//! client wrapper with its request/response interception rules. All
//! business logic lives server-side.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point for the browser build.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
