use std::sync::Arc;

use crate::application::services::{NavigationService, SiteService};
use crate::config::Config;
use crate::domain::registry::RegistryError;

/// Shared state injected into every handler.
///
/// All services sit on one immutable registry built at startup.
#[derive(Clone)]
pub struct AppState {
    pub site_service: Arc<SiteService>,
    pub navigation_service: Arc<NavigationService>,
    pub default_host: String,
    pub max_input_length: usize,
}

impl AppState {
    pub fn new(site_service: SiteService, default_host: impl Into<String>, max_input_length: usize) -> Self {
        let navigation_service = NavigationService::new(site_service.registry().clone());

        Self {
            site_service: Arc::new(site_service),
            navigation_service: Arc::new(navigation_service),
            default_host: default_host.into(),
            max_input_length,
        }
    }

    /// Builds the state for the configured profile.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the built-in registry is inconsistent.
    pub fn from_config(config: &Config) -> Result<Self, RegistryError> {
        let site_service = SiteService::for_profile(config.profile)?;
        Ok(Self::new(
            site_service,
            config.default_host.clone(),
            config.max_input_length,
        ))
    }
}
