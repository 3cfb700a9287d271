//! Web-specific middleware.

pub mod site_context;

pub use site_context::{ActiveSite, SiteAccess};
