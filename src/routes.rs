//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`          - API root listing resource collections
//! - `GET  /health`    - Health check
//! - `/travels/*`      - Travel resource (see [`crate::api::routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - `/travels/` and `/travels` route identically

use crate::api;
use crate::api::handlers::{api_root_handler, health_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(api_root_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::travel_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
