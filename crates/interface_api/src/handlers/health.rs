//! Health check handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::dto::{HealthCheckMessage, ReadinessResponse};
use crate::AppState;

/// Liveness probe
pub async fn health_check() -> Json<HealthCheckMessage> {
    Json(HealthCheckMessage {
        message: "Health Check OK",
    })
}

/// Readiness check (includes database)
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let result = state.service.health_check().await;

    let status = if result.is_available() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ReadinessResponse {
            status: if result.is_available() { "ready" } else { "unavailable" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            detail: result.message,
        }),
    )
}
