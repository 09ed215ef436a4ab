//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/readyz` - Readiness probe (round trip to the item store)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz - Readiness probe.
///
/// Returns 200 when the item store answers, 503 with the error otherwise.
pub async fn readyz(State(state): State<AppState>) -> Response {
    match state.item_repo.health_check().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "healthy": true }))).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "healthy": false, "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
