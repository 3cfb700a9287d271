//! DTOs for the navigation classify endpoint.

use serde::Deserialize;
use validator::Validate;

/// Free-text navigation input to classify.
///
/// The response body is the
/// [`ClassificationResult`](crate::domain::entities::ClassificationResult)
/// itself.
#[derive(Debug, Deserialize, Validate)]
pub struct ClassifyRequest {
    /// Anything the user typed: a domain, URL, path, `?site=` parameter or
    /// site id. Empty input is accepted and classified as invalid.
    #[validate(length(max = 65536, message = "Input is too long"))]
    pub input: String,
}
