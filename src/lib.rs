//! # portal
//!
//! Leptos + WASM frontend for account signup, login and the signed-in
//! landing page. The auth HTTP API is an external service; this crate only
//! talks to it.
//!
//! Pages own route-scoped orchestration, `state` holds the pure models the
//! pages drive (forms, session, route transitions), `validation` declares the
//! per-field rules and `net` wraps the two auth endpoints.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;
pub mod validation;

/// Browser entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let config = config::ClientConfig::from_document();
    let _ = console_log::init_with_level(config.log_level);
    log::debug!("hydrating with api base {}", config.api_base_url);
    leptos::mount::hydrate_body(app::App);
}
