//! DTOs for the tenant resolution endpoint.

use crate::api::dto::site::SiteItem;
use crate::domain::resolver::EdgeAction;
use serde::{Deserialize, Serialize};

/// Query parameters of `GET /api/resolve`.
///
/// `host` defaults to the request's own `Host` header.
#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub host: Option<String>,
    pub site: Option<String>,
}

/// Effective tenant and the edge action for a host/site pair.
///
/// The action is flattened into the body:
///
/// ```json
/// { "host": "srd.fund", "tenant": { "siteId": "srd", ... }, "action": "rewrite", "siteId": "srd" }
/// ```
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub host: String,
    pub tenant: SiteItem,
    #[serde(flatten)]
    pub action: EdgeAction,
}
