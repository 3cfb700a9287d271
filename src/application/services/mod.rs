//! Business logic services for the application layer.

pub mod navigation_service;
pub mod site_service;

pub use navigation_service::NavigationService;
pub use site_service::SiteService;
