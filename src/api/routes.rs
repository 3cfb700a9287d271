//! API route configuration.

use crate::api::handlers::{classify_handler, resolve_handler, site_handler, site_list_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All JSON API routes, nested under `/api` by the application router.
///
/// # Endpoints
///
/// - `POST /classify`         - Classify navigator input
/// - `GET  /resolve`          - Resolve tenant and edge action for a host
/// - `GET  /sites`            - List tenants of the active profile
/// - `GET  /sites/{site_id}`  - Tenant details by site id
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/classify", post(classify_handler))
        .route("/resolve", get(resolve_handler))
        .route("/sites", get(site_list_handler))
        .route("/sites/{site_id}", get(site_handler))
}
