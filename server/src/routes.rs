//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the health probe, Leptos SSR rendering, and static asset serving
//! under a single Axum router. Every screen is server-rendered from
//! `client::app::App`; unknown paths fall through to the same app so its
//! not-found screen renders.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Error raised while assembling the serving stack.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    /// Leptos configuration missing or malformed.
    #[error("leptos configuration: {0}")]
    Config(String),
    /// The PORT override is present but not a valid port number.
    #[error("invalid PORT value {0:?}: {1}")]
    Port(String, std::num::ParseIntError),
}

/// Assemble the router and the address to serve it on.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded or if the
/// `PORT` override is not a valid port number.
pub fn leptos_app() -> Result<(Router, SocketAddr), ServeError> {
    let conf = get_configuration(None).map_err(|e| ServeError::Config(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = bind_addr(leptos_options.site_addr, std::env::var("PORT").ok().as_deref())?;
    let routes = generate_route_list(client::app::App);

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let router = Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    Ok((router, addr))
}

/// Resolve the bind address: a `PORT` override binds all interfaces, else
/// the configured Leptos site address is used as-is.
fn bind_addr(default_addr: SocketAddr, port_env: Option<&str>) -> Result<SocketAddr, ServeError> {
    match port_env {
        Some(raw) => {
            let port: u16 = raw.parse().map_err(|e| ServeError::Port(raw.to_owned(), e))?;
            Ok(SocketAddr::from(([0, 0, 0, 0], port)))
        }
        None => Ok(default_addr),
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
