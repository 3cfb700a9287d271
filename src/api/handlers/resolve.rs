//! Handler for tenant resolution.

use axum::{
    Json,
    extract::{Query, State},
    http::HeaderMap,
};

use crate::api::dto::resolve::{ResolveQuery, ResolveResponse};
use crate::api::dto::site::SiteItem;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::host::host_from_headers;

/// Resolves the effective tenant and edge action for a host and `site` value.
///
/// Lets an external edge layer (CDN worker, reverse proxy) apply the same
/// rewrite/redirect decisions as the built-in middleware.
///
/// # Endpoint
///
/// `GET /api/resolve?host=srd.fund&site=sandeep`
///
/// When `host` is omitted the request's own `Host` header is used.
///
/// # Errors
///
/// Returns 400 Bad Request if the `Host` header is not valid UTF-8.
pub async fn resolve_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ResolveQuery>,
) -> Result<Json<ResolveResponse>, AppError> {
    let host = match query.host {
        Some(host) => host,
        None => host_from_headers(&headers, &state.default_host)?,
    };

    let resolution = state.site_service.resolve(&host, query.site.as_deref());

    Ok(Json(ResolveResponse {
        host,
        tenant: SiteItem::from(&resolution.tenant),
        action: resolution.action,
    }))
}
