//! Navigation URLs for switching between sites.

use crate::domain::entities::SELECTOR_SITE_ID;
use crate::domain::registry::SiteRegistry;
use crate::domain::resolver::{strip_site_param, with_site_param};

/// URL that opens `site_id`.
///
/// External URLs point at the tenant's production domain; the selector and
/// unknown ids have no production domain and always get the internal form.
pub fn site_url(registry: &SiteRegistry, site_id: &str, external: bool) -> String {
    let tenant = registry.tenant_for_site_id(Some(site_id));

    match tenant.external_url() {
        Some(url) if external => url,
        _ => tenant.internal_url(),
    }
}

/// Rebuilds the current location so that it selects `site_id`.
///
/// Other query parameters are kept. Switching to the selector removes the
/// `site` parameter. The current `path` is kept only when `preserve_path` is
/// set; otherwise the result points at `/`.
pub fn switch_site_url(site_id: &str, path: &str, query: Option<&str>, preserve_path: bool) -> String {
    let path = if preserve_path && !path.is_empty() { path } else { "/" };

    let query = if site_id == SELECTOR_SITE_ID {
        query.and_then(strip_site_param)
    } else {
        Some(with_site_param(query, site_id))
    };

    match query {
        Some(q) => format!("{path}?{q}"),
        None => path.to_string(),
    }
}
