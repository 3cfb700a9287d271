//! Core site resolution and navigation logic.
//!
//! Everything in this layer is pure and synchronous: no I/O, no shared
//! mutable state. The HTTP layers in [`crate::api`] and [`crate::routes`]
//! only apply the decisions made here.
//!
//! # Architecture
//!
//! - [`entities`] - Tenant and classification result models
//! - [`registry`] - Immutable host/site-id lookup table
//! - [`profiles`] - Built-in tenant tables per deployment profile
//! - [`resolver`] - Effective tenant and edge action per request
//! - [`classifier`] - Free-text navigation input classification
//! - [`site_urls`] - Site switching URL helpers
//!
//! # Request Flow
//!
//! 1. Edge middleware reads `Host` and the `site` query parameter
//! 2. [`resolver::RequestResolver::decide`] returns the tenant and an action
//! 3. The middleware rewrites, redirects, or passes the request through

pub mod classifier;
pub mod entities;
pub mod profiles;
pub mod registry;
pub mod resolver;
pub mod site_urls;
