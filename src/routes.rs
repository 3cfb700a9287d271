//! Top-level router configuration combining API and page routes.
//!
//! # Route Structure
//!
//! - `GET  /`             - Page context of the effective tenant
//! - `GET  /{*path}`      - Page context for any other page path
//! - `GET  /sitemap.xml`  - Sitemap of the host-resolved tenant
//! - `GET  /health`       - Health check: registry, classifier
//! - `/api/*`             - JSON API (rate limited per client IP)
//!
//! # Middleware
//!
//! - **Site context** - Tenant rewrite/redirect on page routes
//! - **Rate limiting** - Per-IP token bucket on the JSON API
//! - **Security headers** - Frame, sniffing and referrer policy on every response
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, security_headers, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::middleware::site_context;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/profile/xai/` is
/// served as `/profile/xai`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// The application router without path normalization.
///
/// The JSON API extracts client IPs from `ConnectInfo<SocketAddr>`, so the
/// router must be served with connect info.
pub fn router(state: AppState) -> Router {
    let api_router = api::routes::routes().layer(rate_limit::layer());

    let pages = web::routes::page_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        site_context::layer,
    ));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .merge(web::routes::public_routes())
        .merge(pages)
        .with_state(state)
        .layer(security_headers::layer())
        .layer(tracing::layer())
}
