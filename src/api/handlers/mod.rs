//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod classify;
pub mod health;
pub mod resolve;
pub mod sites;

pub use classify::classify_handler;
pub use health::health_handler;
pub use resolve::resolve_handler;
pub use sites::{site_handler, site_list_handler};
