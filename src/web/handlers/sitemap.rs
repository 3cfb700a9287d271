//! XML sitemap for the host-resolved tenant.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::{HeaderMap, header},
    response::IntoResponse,
};
use chrono::{NaiveDate, Utc};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::host::host_from_headers;

/// Template for `sitemap.xml`.
///
/// Renders `templates/sitemap.xml` with:
/// - `base_url` with priority 1.0, changed weekly
/// - every known path under `base_url` with priority 0.8, changed monthly
///
/// Values are XML-escaped by the template engine.
#[derive(Template, WebTemplate)]
#[template(path = "sitemap.xml")]
pub struct SitemapTemplate {
    pub base_url: String,
    pub paths: Vec<String>,
    pub lastmod: NaiveDate,
}

/// Serves `sitemap.xml` for the tenant owning the request host.
///
/// # Endpoint
///
/// `GET /sitemap.xml`
///
/// The base URL is `https://<domain>` of the host tenant. All entries carry
/// today's date as `lastmod`.
///
/// # Errors
///
/// Returns 400 Bad Request if the `Host` header is not valid UTF-8.
pub async fn sitemap_handler(
    State(st): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let host = host_from_headers(&headers, &st.default_host)?;
    let tenant = st.site_service.tenant_for_host(&host);

    let template = SitemapTemplate {
        base_url: format!("https://{}", tenant.domain),
        paths: st.site_service.registry().known_paths().to_vec(),
        lastmod: Utc::now().date_naive(),
    };

    Ok(([(header::CONTENT_TYPE, "application/xml")], template))
}
