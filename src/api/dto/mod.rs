//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Field names are camelCase to match the
//! [`crate::domain::entities`] models returned verbatim by some endpoints.

pub mod classify;
pub mod health;
pub mod resolve;
pub mod site;
