//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{page_handler, sitemap_handler};
use axum::{Router, routing::get};

/// Tenant page routes, resolved by [`crate::web::middleware::site_context`].
///
/// The caller attaches the site context middleware with `route_layer` so
/// that it only runs for matched page requests.
///
/// # Endpoints
///
/// - `GET /`         - Home page of the effective tenant
/// - `GET /{*path}`  - Any other page path
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(page_handler))
        .route("/{*path}", get(page_handler))
}

/// Public routes outside the site context middleware.
///
/// # Endpoints
///
/// - `GET /sitemap.xml` - Sitemap of the host-resolved tenant
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/sitemap.xml", get(sitemap_handler))
}
