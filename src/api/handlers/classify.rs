//! Handler for navigation input classification.

use axum::{Json, extract::State};
use serde_json::json;
use validator::Validate;

use crate::api::dto::classify::ClassifyRequest;
use crate::domain::entities::ClassificationResult;
use crate::error::AppError;
use crate::state::AppState;

/// Classifies free-text navigation input.
///
/// # Endpoint
///
/// `POST /api/classify`
///
/// # Request Body
///
/// ```json
/// { "input": "/profile/spacez" }
/// ```
///
/// # Response
///
/// Always `200 OK` with a classification, including unmatched input:
///
/// ```json
/// {
///   "isValid": false,
///   "kind": "invalid",
///   "originalInput": "/profile/spacez",
///   "canonicalDestination": "",
///   "displayLabel": "",
///   "isExternal": false,
///   "errorMessage": "Path not found: /profile/spacez",
///   "suggestions": ["/profile/spacex"]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the input exceeds the configured maximum length.
pub async fn classify_handler(
    State(state): State<AppState>,
    Json(payload): Json<ClassifyRequest>,
) -> Result<Json<ClassificationResult>, AppError> {
    payload.validate()?;

    if payload.input.len() > state.max_input_length {
        return Err(AppError::bad_request(
            "Input is too long",
            json!({
                "max_length": state.max_input_length,
                "length": payload.input.len(),
            }),
        ));
    }

    Ok(Json(state.navigation_service.classify(&payload.input)))
}
