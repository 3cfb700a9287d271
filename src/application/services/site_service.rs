//! Tenant lookup and request resolution service.

use crate::domain::entities::TenantConfig;
use crate::domain::profiles::{Profile, builtin_registry};
use crate::domain::registry::{RegistryError, SiteRegistry};
use crate::domain::resolver::{RequestResolver, Resolution};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service exposing the site registry and request resolver to handlers.
#[derive(Clone)]
pub struct SiteService {
    registry: Arc<SiteRegistry>,
    resolver: RequestResolver<SiteRegistry>,
    profile: Profile,
}

impl SiteService {
    /// Creates a service over an already built registry.
    pub fn new(registry: Arc<SiteRegistry>, profile: Profile) -> Self {
        Self {
            resolver: RequestResolver::new(registry.clone()),
            registry,
            profile,
        }
    }

    /// Creates a service over the built-in registry of `profile`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the built-in table is inconsistent.
    pub fn for_profile(profile: Profile) -> Result<Self, RegistryError> {
        Ok(Self::new(Arc::new(builtin_registry(profile)?), profile))
    }

    pub fn registry(&self) -> &Arc<SiteRegistry> {
        &self.registry
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Resolves the effective tenant and edge action for a request.
    pub fn resolve(&self, host: &str, site_param: Option<&str>) -> Resolution {
        self.resolver.resolve(host, site_param)
    }

    /// Decides the edge action from a host and raw query string.
    pub fn decide(&self, host: &str, query: Option<&str>) -> Resolution {
        self.resolver.decide(host, query)
    }

    /// Tenant serving `host`, ignoring any override parameter.
    pub fn tenant_for_host(&self, host: &str) -> &TenantConfig {
        self.registry.tenant_for_host(host)
    }

    /// All tenants in registration order, selector included.
    pub fn list_sites(&self) -> &[TenantConfig] {
        self.registry.tenants()
    }

    /// Retrieves a tenant by site id.
    ///
    /// Unlike registry lookups this does not fall back to the selector.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no tenant uses `site_id`.
    pub fn get_site(&self, site_id: &str) -> Result<&TenantConfig, AppError> {
        if !self.registry.contains_site_id(site_id) {
            return Err(AppError::not_found(
                "Site not found",
                json!({ "site_id": site_id }),
            ));
        }
        Ok(self.registry.tenant_for_site_id(Some(site_id)))
    }
}
