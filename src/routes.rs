//! Top-level router with middleware applied.

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router.
///
/// Adds request tracing and trims trailing slashes so `/save/` and `/save`
/// reach the same handler.
pub fn app_router(state: AppState) -> NormalizePath<axum::Router> {
    let router = api::routes::routes()
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
