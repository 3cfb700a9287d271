//! Page context handoff to the external renderer.

use axum::{
    Extension, Json,
    extract::{RawQuery, State},
    http::Uri,
};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::api::dto::site::SiteItem;
use crate::domain::site_urls::switch_site_url;
use crate::state::AppState;
use crate::web::middleware::{ActiveSite, SiteAccess};

/// Page request context for the renderer.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContext {
    pub site: SiteItem,
    pub access: SiteAccess,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Site switcher links per site id, keeping the current path and the
    /// other query parameters.
    pub switch_urls: BTreeMap<String, String>,
}

/// Describes the effective tenant of a page request.
///
/// Rendering is out of scope; the response tells a renderer which tenant,
/// path and query to render, and where each site switcher link points.
///
/// # Endpoints
///
/// `GET /` and `GET /{*path}`, behind the site context middleware.
///
/// # Response
///
/// ```json
/// {
///   "site": { "siteId": "srd", "domain": "srd.fund", "isSelector": false, ... },
///   "access": "domain",
///   "path": "/profile/xai",
///   "query": "site=srd",
///   "switchUrls": {
///     "sandeep": "/profile/xai?site=sandeep",
///     "selector": "/profile/xai",
///     ...
///   }
/// }
/// ```
pub async fn page_handler(
    State(st): State<AppState>,
    Extension(active): Extension<ActiveSite>,
    uri: Uri,
    RawQuery(query): RawQuery,
) -> Json<PageContext> {
    let path = uri.path();

    let switch_urls = st
        .site_service
        .list_sites()
        .iter()
        .map(|tenant| {
            let url = switch_site_url(&tenant.site_id, path, query.as_deref(), true);
            (tenant.site_id.clone(), url)
        })
        .collect();

    Json(PageContext {
        site: SiteItem::from(&active.tenant),
        access: active.access,
        path: path.to_string(),
        query,
        switch_urls,
    })
}
