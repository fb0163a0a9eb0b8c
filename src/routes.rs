//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing page is a client-rendered bundle. This router serves its files
//! and answers every other path with `index.html` so client routes (`/`,
//! `/chat`) load on a hard refresh. Nothing is rendered server-side.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Health probe plus the static bundle with SPA fallback.
pub fn app(config: &ServerConfig) -> Router {
    let bundle = ServeDir::new(&config.dist_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(config.index_html()));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(bundle)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
