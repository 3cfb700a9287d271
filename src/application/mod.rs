//! Application layer services.
//!
//! Services wrap the pure domain components with logging and metrics and give
//! HTTP handlers a small API to call.
//!
//! # Available Services
//!
//! - [`services::site_service::SiteService`] - Tenant lookups and request resolution
//! - [`services::navigation_service::NavigationService`] - Navigation input classification

pub mod services;
