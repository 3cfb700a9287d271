//! Helper functions shared across the crate.
//!
//! - [`host`] - Host header extraction and normalization
//! - [`levenshtein`] - Edit distance used for navigation suggestions
//! - [`url_normalizer`] - Absolute URL parsing for navigation input

pub mod host;
pub mod levenshtein;
pub mod url_normalizer;
