//! Edge layer for tenant-facing page routes.
//!
//! Applies the request resolver's decisions to incoming page requests and
//! hands the effective tenant to the page renderer.
//!
//! # Modules
//!
//! - [`handlers`] - Page context and sitemap handlers
//! - [`middleware`] - Site context resolution (rewrite/redirect)
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
