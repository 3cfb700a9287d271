//! # Site Router
//!
//! Multi-site tenant routing for a single web application serving several
//! branded sites, built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Site registry, request resolver, URL classifier
//! - **Application Layer** ([`application`]) - Services with logging and metrics
//! - **API Layer** ([`api`]) - JSON API handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Site context middleware and page handoff
//!
//! ## Features
//!
//! - Host and `site` parameter based tenant resolution
//! - Internal rewrites for tenant domains, redirects for unknown sites
//! - Free-text navigation classification with edit-distance suggestions
//! - Production and staging registry profiles
//!
//! ## Quick Start
//!
//! ```bash
//! export SITE_PROFILE=staging   # Optional, defaults to production
//! cargo run
//!
//! # Operator CLI
//! cargo run --bin navigate -- classify /profile/spacez
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{NavigationService, SiteService};
    pub use crate::domain::classifier::UrlClassifier;
    pub use crate::domain::entities::{ClassificationKind, ClassificationResult, TenantConfig};
    pub use crate::domain::profiles::{Profile, builtin_registry};
    pub use crate::domain::registry::SiteRegistry;
    pub use crate::domain::resolver::{EdgeAction, RequestResolver, Resolution};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
