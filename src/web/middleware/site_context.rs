//! Site context middleware for tenant page routes.

use axum::{
    extract::{Request, State},
    http::{Uri, uri::PathAndQuery},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;
use serde_json::json;

use crate::domain::entities::TenantConfig;
use crate::domain::resolver::{EdgeAction, strip_site_param, with_site_param};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::host::host_from_headers;

/// How the effective tenant of a request was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteAccess {
    /// The request host belongs to the tenant.
    Domain,
    /// A valid `site` parameter selected the tenant.
    Parameter,
    /// No tenant selected; the selector page applies.
    Selector,
}

/// Effective tenant of a page request, inserted into request extensions.
#[derive(Debug, Clone)]
pub struct ActiveSite {
    pub tenant: TenantConfig,
    pub access: SiteAccess,
}

/// Resolves the tenant of a page request and applies the edge action.
///
/// # Flow
///
/// 1. Read the `Host` header, falling back to the configured default host
/// 2. Ask the resolver for a decision using the raw query string
/// 3. Apply the action:
///    - `rewrite`: add `site=<id>` to the request URI and continue
///    - `redirect`: answer `307 Temporary Redirect` to the same path without
///      `site`, keeping other query parameters
///    - `none`: continue unchanged
/// 4. Insert [`ActiveSite`] into request extensions
///
/// A rewrite never reaches the client; handlers observe the injected
/// parameter in the request query.
///
/// # Example
///
/// ```rust,ignore
/// let pages = web::routes::page_routes()
///     .route_layer(middleware::from_fn_with_state(state.clone(), site_context::layer));
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the `Host` header is not valid UTF-8.
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let host = host_from_headers(req.headers(), &st.default_host)?;
    let query = req.uri().query().map(str::to_owned);

    let resolution = st.site_service.decide(&host, query.as_deref());

    let access = match &resolution.action {
        EdgeAction::Redirect => {
            let path = req.uri().path();
            let location = match query.as_deref().and_then(strip_site_param) {
                Some(rest) => format!("{path}?{rest}"),
                None => path.to_string(),
            };
            return Ok(Redirect::temporary(&location).into_response());
        }
        EdgeAction::Rewrite { site_id } => {
            let rewritten = with_site_param(query.as_deref(), site_id);
            let uri = replace_query(req.uri(), &rewritten)?;
            *req.uri_mut() = uri;
            SiteAccess::Domain
        }
        EdgeAction::None if resolution.tenant.is_selector() => SiteAccess::Selector,
        EdgeAction::None => SiteAccess::Parameter,
    };

    req.extensions_mut().insert(ActiveSite {
        tenant: resolution.tenant,
        access,
    });

    Ok(next.run(req).await)
}

/// Returns `uri` with its query replaced by `query`.
fn replace_query(uri: &Uri, query: &str) -> Result<Uri, AppError> {
    let path_and_query = PathAndQuery::try_from(format!("{}?{query}", uri.path()))
        .map_err(|e| AppError::internal("Failed to rewrite request", json!({ "reason": e.to_string() })))?;

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query);

    Uri::from_parts(parts)
        .map_err(|e| AppError::internal("Failed to rewrite request", json!({ "reason": e.to_string() })))
}
