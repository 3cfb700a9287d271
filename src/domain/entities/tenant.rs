//! Tenant entity representing one publicly addressable site identity.

use serde::Serialize;

/// Site identifier of the multi-tenant landing view.
///
/// The selector tenant has no production domain; its `domain` is a placeholder
/// that only local and preview hosts resolve to.
pub const SELECTOR_SITE_ID: &str = "selector";

/// One branded identity serving the shared portfolio content.
///
/// Every `site_id` and every `domain` identifies exactly one tenant within a
/// [`crate::domain::registry::SiteRegistry`]. Presentation fields (`theme`,
/// `secondary_theme`, `favicon`, `og_image`) are passed through to the
/// rendering layer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantConfig {
    pub domain: String,
    pub site_id: String,
    pub display_name: String,
    pub description: String,
    pub theme: String,
    pub secondary_theme: String,
    pub favicon: String,
    pub og_image: String,
}

impl TenantConfig {
    /// Creates a tenant with default presentation assets.
    ///
    /// # Examples
    ///
    /// ```
    /// use site_router::domain::entities::TenantConfig;
    ///
    /// let tenant = TenantConfig::new("srd.fund", "srd", "SRD Innovation Fund")
    ///     .with_theme("blue", "indigo");
    ///
    /// assert_eq!(tenant.site_id, "srd");
    /// assert!(!tenant.is_selector());
    /// ```
    pub fn new(
        domain: impl Into<String>,
        site_id: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        let site_id = site_id.into();
        let (favicon, og_image) = if site_id == SELECTOR_SITE_ID {
            ("/favicon.ico".to_string(), "/og-image.png".to_string())
        } else {
            (
                format!("/favicons/{site_id}-favicon.ico"),
                format!("/og-images/{site_id}-og.png"),
            )
        };

        Self {
            domain: domain.into(),
            site_id,
            display_name: display_name.into(),
            description: String::new(),
            theme: "slate".to_string(),
            secondary_theme: "gray".to_string(),
            favicon,
            og_image,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_theme(mut self, primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        self.theme = primary.into();
        self.secondary_theme = secondary.into();
        self
    }

    /// Returns true for the "no specific tenant" landing identity.
    pub fn is_selector(&self) -> bool {
        self.site_id == SELECTOR_SITE_ID
    }

    /// Absolute URL of the tenant's production domain.
    ///
    /// Returns `None` for the selector, whose domain is only a placeholder.
    pub fn external_url(&self) -> Option<String> {
        if self.is_selector() {
            None
        } else {
            Some(format!("https://{}", self.domain))
        }
    }

    /// Same-origin URL selecting this tenant through the `site` parameter.
    pub fn internal_url(&self) -> String {
        if self.is_selector() {
            "/".to_string()
        } else {
            format!("/?site={}", self.site_id)
        }
    }
}
