//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Registry**: Has at least one named tenant besides the selector
/// 2. **Classifier**: Classifies the first tenant's site id as valid
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "profile": "production",
///   "checks": {
///     "registry": { "status": "ok", "message": "5 tenants, 7 known paths" },
///     "classifier": { "status": "ok", "message": "srd -> /?site=srd" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let registry_check = check_registry(&state);
    let classifier_check = check_classifier(&state);

    let all_healthy = registry_check.status == "ok" && classifier_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        profile: state.site_service.profile().to_string(),
        checks: HealthChecks {
            registry: registry_check,
            classifier: classifier_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the registry serves at least one named tenant.
fn check_registry(state: &AppState) -> CheckStatus {
    let registry = state.site_service.registry();
    let tenants = registry.tenants().len();
    let paths = registry.known_paths().len();

    if registry.sites().next().is_some() {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{tenants} tenants, {paths} known paths")),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Registry has no named tenants".to_string()),
        }
    }
}

/// Round-trips the first tenant's site id through the classifier.
fn check_classifier(state: &AppState) -> CheckStatus {
    let Some(site) = state.site_service.registry().sites().next() else {
        return CheckStatus {
            status: "error".to_string(),
            message: Some("No site id to classify".to_string()),
        };
    };

    let result = state.navigation_service.classify(&site.site_id);
    if result.is_valid {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!(
                "{} -> {}",
                site.site_id, result.canonical_destination
            )),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: result.error_message,
        }
    }
}
