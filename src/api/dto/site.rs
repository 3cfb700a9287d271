//! DTOs for site listing.

use crate::domain::entities::TenantConfig;
use serde::Serialize;

/// Tenant details plus the URLs that open it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteItem {
    #[serde(flatten)]
    pub tenant: TenantConfig,
    pub is_selector: bool,
    /// Same-origin URL selecting the tenant via the `site` parameter.
    pub internal_url: String,
    /// Production URL; absent for the selector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
}

impl From<&TenantConfig> for SiteItem {
    fn from(tenant: &TenantConfig) -> Self {
        Self {
            is_selector: tenant.is_selector(),
            internal_url: tenant.internal_url(),
            external_url: tenant.external_url(),
            tenant: tenant.clone(),
        }
    }
}

/// Response containing every registered tenant.
#[derive(Debug, Serialize)]
pub struct SiteListResponse {
    pub profile: String,
    pub items: Vec<SiteItem>,
}
