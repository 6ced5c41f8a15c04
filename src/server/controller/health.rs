use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{ErrorDto, HealthDto},
    server::state::AppState,
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Check service health.
///
/// Pings the database; the service is healthy only when the database answers.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Service and database are reachable
/// - `503 Service Unavailable` - Database did not answer the ping
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is healthy", body = HealthDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
)]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthDto {
                status: "healthy".to_string(),
                database: "connected".to_string(),
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Health check database ping failed: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorDto {
                    error: "Database unavailable".to_string(),
                }),
            )
                .into_response()
        }
    }
}
