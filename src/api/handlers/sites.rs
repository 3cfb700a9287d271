//! Handlers for site listing.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::site::{SiteItem, SiteListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every tenant of the active profile, selector included.
///
/// # Endpoint
///
/// `GET /api/sites`
pub async fn site_list_handler(State(state): State<AppState>) -> Json<SiteListResponse> {
    let items = state
        .site_service
        .list_sites()
        .iter()
        .map(SiteItem::from)
        .collect();

    Json(SiteListResponse {
        profile: state.site_service.profile().to_string(),
        items,
    })
}

/// Returns one tenant by site id.
///
/// # Endpoint
///
/// `GET /api/sites/{site_id}`
///
/// # Errors
///
/// Returns 404 Not Found if no tenant uses `site_id`.
pub async fn site_handler(
    State(state): State<AppState>,
    Path(site_id): Path<String>,
) -> Result<Json<SiteItem>, AppError> {
    let tenant = state.site_service.get_site(&site_id)?;
    Ok(Json(SiteItem::from(tenant)))
}
