//! Static tenant registry keyed by host and by site identifier.
//!
//! The registry is built once at startup through [`SiteRegistryBuilder`],
//! validated, and then shared read-only between the request resolver and the
//! URL classifier. Lookups never fail: unknown hosts and unknown site ids fall
//! back to the selector tenant.

use crate::domain::entities::{SELECTOR_SITE_ID, TenantConfig};
use crate::utils::host::normalize_host;
use std::collections::HashMap;

/// Errors raised while assembling a registry.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("tenant site id must not be empty")]
    EmptySiteId,

    #[error("duplicate site id: {0}")]
    DuplicateSiteId(String),

    #[error("host {0} is mapped to more than one tenant")]
    DuplicateHost(String),

    #[error("registry has no 'selector' tenant")]
    MissingSelector,

    #[error("host alias {host} points at unknown site id {site_id}")]
    UnknownAliasTarget { host: String, site_id: String },

    #[error("known path must start with '/' and have at least one segment: {0:?}")]
    InvalidKnownPath(String),

    #[error("duplicate known path: {0}")]
    DuplicateKnownPath(String),
}

/// Tenant lookups consumed by the request resolver.
///
/// # Implementations
///
/// - [`SiteRegistry`] - Static in-memory registry
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait TenantLookup: Send + Sync {
    /// Tenant serving `host`, or the selector when the host is unknown.
    fn resolve_by_host(&self, host: &str) -> TenantConfig;

    /// Tenant registered under `site_id`, or the selector when unknown.
    fn resolve_by_site_id(&self, site_id: &str) -> TenantConfig;
}

/// Immutable mapping between hosts, site ids and tenants.
#[derive(Debug, Clone)]
pub struct SiteRegistry {
    tenants: Vec<TenantConfig>,
    by_host: HashMap<String, usize>,
    by_site_id: HashMap<String, usize>,
    selector: usize,
    known_paths: Vec<String>,
}

impl SiteRegistry {
    pub fn builder() -> SiteRegistryBuilder {
        SiteRegistryBuilder::default()
    }

    /// Resolves a request host to its tenant.
    ///
    /// The host is compared case-insensitively. Ports are stripped for local
    /// development hosts only, so `localhost:4000` finds the same tenant as
    /// `localhost:3000` while `srd.fund:8443` does not match `srd.fund`.
    pub fn tenant_for_host(&self, host: &str) -> &TenantConfig {
        self.by_host
            .get(&normalize_host(host))
            .map(|&idx| &self.tenants[idx])
            .unwrap_or_else(|| self.selector())
    }

    /// Resolves a site id to its tenant.
    ///
    /// Matching is exact and case-sensitive. Missing or unknown ids yield the
    /// selector.
    pub fn tenant_for_site_id(&self, site_id: Option<&str>) -> &TenantConfig {
        site_id
            .and_then(|id| self.by_site_id.get(id))
            .map(|&idx| &self.tenants[idx])
            .unwrap_or_else(|| self.selector())
    }

    /// The "no specific tenant" landing identity.
    pub fn selector(&self) -> &TenantConfig {
        &self.tenants[self.selector]
    }

    /// All tenants in registration order, selector included.
    pub fn tenants(&self) -> &[TenantConfig] {
        &self.tenants
    }

    /// Named tenants in registration order, selector excluded.
    pub fn sites(&self) -> impl Iterator<Item = &TenantConfig> {
        self.tenants.iter().filter(|t| !t.is_selector())
    }

    /// Named tenant registered under `site_id`.
    pub fn site(&self, site_id: &str) -> Option<&TenantConfig> {
        self.by_site_id
            .get(site_id)
            .map(|&idx| &self.tenants[idx])
            .filter(|t| !t.is_selector())
    }

    /// Named tenant whose canonical domain equals `domain`, ignoring case.
    ///
    /// Host aliases and the selector never match.
    pub fn site_by_domain(&self, domain: &str) -> Option<&TenantConfig> {
        let host = normalize_host(domain);

        self.by_host
            .get(&host)
            .map(|&idx| &self.tenants[idx])
            .filter(|t| !t.is_selector() && normalize_host(&t.domain) == host)
    }

    /// Returns true when `site_id` names a registered tenant, selector included.
    pub fn contains_site_id(&self, site_id: &str) -> bool {
        self.by_site_id.contains_key(site_id)
    }

    /// Registry-known internal paths in registration order.
    pub fn known_paths(&self) -> &[String] {
        &self.known_paths
    }
}

impl TenantLookup for SiteRegistry {
    fn resolve_by_host(&self, host: &str) -> TenantConfig {
        self.tenant_for_host(host).clone()
    }

    fn resolve_by_site_id(&self, site_id: &str) -> TenantConfig {
        self.tenant_for_site_id(Some(site_id)).clone()
    }
}

/// Validating builder for [`SiteRegistry`].
#[derive(Debug, Default)]
pub struct SiteRegistryBuilder {
    tenants: Vec<TenantConfig>,
    aliases: Vec<(String, String)>,
    known_paths: Vec<String>,
}

impl SiteRegistryBuilder {
    pub fn tenant(mut self, tenant: TenantConfig) -> Self {
        self.tenants.push(tenant);
        self
    }

    /// Maps an additional host onto an already registered site id.
    pub fn host_alias(mut self, host: impl Into<String>, site_id: impl Into<String>) -> Self {
        self.aliases.push((host.into(), site_id.into()));
        self
    }

    pub fn known_path(mut self, path: impl Into<String>) -> Self {
        self.known_paths.push(path.into());
        self
    }

    pub fn known_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Validates and freezes the registry.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistryError`] when a site id or host is registered twice,
    /// the selector tenant is missing, an alias targets an unknown site id, or
    /// a known path is malformed or duplicated.
    pub fn build(self) -> Result<SiteRegistry, RegistryError> {
        let mut by_host = HashMap::new();
        let mut by_site_id = HashMap::new();

        for (idx, tenant) in self.tenants.iter().enumerate() {
            if tenant.site_id.is_empty() {
                return Err(RegistryError::EmptySiteId);
            }
            if by_site_id.insert(tenant.site_id.clone(), idx).is_some() {
                return Err(RegistryError::DuplicateSiteId(tenant.site_id.clone()));
            }

            let host = normalize_host(&tenant.domain);
            if by_host.insert(host.clone(), idx).is_some() {
                return Err(RegistryError::DuplicateHost(host));
            }
        }

        let selector = *by_site_id
            .get(SELECTOR_SITE_ID)
            .ok_or(RegistryError::MissingSelector)?;

        for (host, site_id) in self.aliases {
            let idx = *by_site_id
                .get(&site_id)
                .ok_or_else(|| RegistryError::UnknownAliasTarget {
                    host: host.clone(),
                    site_id: site_id.clone(),
                })?;

            let host = normalize_host(&host);
            if by_host.insert(host.clone(), idx).is_some() {
                return Err(RegistryError::DuplicateHost(host));
            }
        }

        let mut known_paths: Vec<String> = Vec::with_capacity(self.known_paths.len());
        for path in self.known_paths {
            if !path.starts_with('/') || path.len() < 2 {
                return Err(RegistryError::InvalidKnownPath(path));
            }
            if known_paths.contains(&path) {
                return Err(RegistryError::DuplicateKnownPath(path));
            }
            known_paths.push(path);
        }

        Ok(SiteRegistry {
            tenants: self.tenants,
            by_host,
            by_site_id,
            selector,
            known_paths,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector() -> TenantConfig {
        TenantConfig::new("localhost:3000", SELECTOR_SITE_ID, "Landing")
    }

    fn sample_registry() -> SiteRegistry {
        SiteRegistry::builder()
            .tenant(TenantConfig::new("alpha.example", "alpha", "Alpha"))
            .tenant(TenantConfig::new("beta.example", "beta", "Beta"))
            .tenant(selector())
            .host_alias("preview.vusercontent.net", SELECTOR_SITE_ID)
            .known_paths(["/profile/one", "/person/two"])
            .build()
            .unwrap()
    }

    #[test]
    fn test_resolve_by_known_host() {
        let registry = sample_registry();

        assert_eq!(registry.tenant_for_host("alpha.example").site_id, "alpha");
        assert_eq!(registry.tenant_for_host("BETA.Example").site_id, "beta");
    }

    #[test]
    fn test_resolve_by_host_is_idempotent() {
        let registry = sample_registry();

        let first = registry.tenant_for_host("alpha.example").clone();
        let second = registry.tenant_for_host("alpha.example").clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_host_falls_back_to_selector() {
        let registry = sample_registry();

        assert!(registry.tenant_for_host("unknown.example").is_selector());
        assert!(registry.tenant_for_host("").is_selector());
    }

    #[test]
    fn test_production_host_with_port_is_not_stripped() {
        let registry = sample_registry();

        assert!(registry.tenant_for_host("alpha.example:8443").is_selector());
    }

    #[test]
    fn test_local_hosts_resolve_to_selector_on_any_port() {
        let registry = sample_registry();

        assert!(registry.tenant_for_host("localhost:3000").is_selector());
        assert!(registry.tenant_for_host("localhost:5173").is_selector());
        assert!(registry.tenant_for_host("preview.vusercontent.net").is_selector());
    }

    #[test]
    fn test_resolve_by_site_id() {
        let registry = sample_registry();

        assert_eq!(registry.tenant_for_site_id(Some("beta")).domain, "beta.example");
        assert!(registry.tenant_for_site_id(Some("BETA")).is_selector());
        assert!(registry.tenant_for_site_id(Some("gamma")).is_selector());
        assert!(registry.tenant_for_site_id(None).is_selector());
    }

    #[test]
    fn test_sites_exclude_selector() {
        let registry = sample_registry();

        let ids: Vec<_> = registry.sites().map(|t| t.site_id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "beta"]);
        assert_eq!(registry.tenants().len(), 3);
        assert!(registry.site(SELECTOR_SITE_ID).is_none());
        assert!(registry.contains_site_id(SELECTOR_SITE_ID));
    }

    #[test]
    fn test_site_by_domain_ignores_case() {
        let registry = sample_registry();

        assert_eq!(registry.site_by_domain("ALPHA.example").unwrap().site_id, "alpha");
        assert!(registry.site_by_domain("localhost:3000").is_none());
        assert!(registry.site_by_domain("preview.vusercontent.net").is_none());
        assert!(registry.site_by_domain("gamma.example").is_none());
    }

    #[test]
    fn test_site_by_domain_skips_aliases() {
        let registry = SiteRegistry::builder()
            .tenant(TenantConfig::new("alpha.example", "alpha", "Alpha"))
            .tenant(selector())
            .host_alias("www.alpha.example", "alpha")
            .build()
            .unwrap();

        assert_eq!(registry.tenant_for_host("www.alpha.example").site_id, "alpha");
        assert!(registry.site_by_domain("www.alpha.example").is_none());
        assert_eq!(registry.site_by_domain(" Alpha.Example ").unwrap().site_id, "alpha");
    }

    #[test]
    fn test_trait_lookup_clones() {
        let registry = sample_registry();

        assert_eq!(registry.resolve_by_host("alpha.example").site_id, "alpha");
        assert!(registry.resolve_by_site_id("missing").is_selector());
    }

    #[test]
    fn test_duplicate_site_id_rejected() {
        let result = SiteRegistry::builder()
            .tenant(TenantConfig::new("a.example", "a", "A"))
            .tenant(TenantConfig::new("b.example", "a", "B"))
            .tenant(selector())
            .build();

        assert_eq!(result.unwrap_err(), RegistryError::DuplicateSiteId("a".into()));
    }

    #[test]
    fn test_duplicate_host_rejected() {
        let result = SiteRegistry::builder()
            .tenant(TenantConfig::new("a.example", "a", "A"))
            .tenant(TenantConfig::new("A.EXAMPLE", "b", "B"))
            .tenant(selector())
            .build();

        assert_eq!(result.unwrap_err(), RegistryError::DuplicateHost("a.example".into()));
    }

    #[test]
    fn test_missing_selector_rejected() {
        let result = SiteRegistry::builder()
            .tenant(TenantConfig::new("a.example", "a", "A"))
            .build();

        assert_eq!(result.unwrap_err(), RegistryError::MissingSelector);
    }

    #[test]
    fn test_alias_to_unknown_site_rejected() {
        let result = SiteRegistry::builder()
            .tenant(selector())
            .host_alias("other.example", "ghost")
            .build();

        assert!(matches!(
            result.unwrap_err(),
            RegistryError::UnknownAliasTarget { .. }
        ));
    }

    #[test]
    fn test_invalid_known_paths_rejected() {
        let result = SiteRegistry::builder()
            .tenant(selector())
            .known_path("profile/x")
            .build();
        assert_eq!(
            result.unwrap_err(),
            RegistryError::InvalidKnownPath("profile/x".into())
        );

        let result = SiteRegistry::builder()
            .tenant(selector())
            .known_paths(["/a", "/a"])
            .build();
        assert_eq!(result.unwrap_err(), RegistryError::DuplicateKnownPath("/a".into()));
    }
}
