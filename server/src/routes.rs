//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only renders and ships the frontend. Leptos SSR answers the three
//! client paths, the compiled bundle is served from `/pkg`, and `/healthz`
//! is the liveness probe. The auth API lives elsewhere; its origin reaches
//! the browser through the client config rendered into the shell.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use portal::config::ClientConfig;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ServerConfig};

/// Build the full host router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(portal::app::App);
    tracing::debug!(count = routes.len(), "leptos routes generated");

    let client = config.client.clone();
    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let client = client.clone();
                move || provide_context::<ClientConfig>(client.clone())
            },
            {
                let opts = leptos_options.clone();
                move || portal::app::shell(opts.clone(), client.clone())
            },
        )
        .route("/healthz", get(healthz))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(leptos_router
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
