//! Health check endpoint.

use axum::{extract::State, http::StatusCode, Json};

use kvapi_core::health::HealthResponse;

use crate::services::HealthService;

/// GET /health - Aggregated health of the API and its configured dependencies.
///
/// Always returns the report body; the status is 200 when healthy and 503 otherwise.
#[axum::debug_handler]
pub async fn health(State(service): State<HealthService>) -> (StatusCode, Json<HealthResponse>) {
    let response = service.check().await;
    let status = if response.ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
