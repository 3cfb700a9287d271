//! Core entities shared by the registry, resolver and classifier.

pub mod classification;
pub mod tenant;

pub use classification::{ClassificationKind, ClassificationResult};
pub use tenant::{SELECTOR_SITE_ID, TenantConfig};
