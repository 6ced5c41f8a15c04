use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        alert::{AlertDto, CreateAlertDto},
        api::{ErrorDto, MessageDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::alert::AlertService,
        state::AppState,
    },
};

/// Tag for grouping alert endpoints in OpenAPI documentation
pub static ALERT_TAG: &str = "alerts";

/// Create a price alert.
///
/// Creates an alert owned by the authenticated user. The alert starts active
/// and stays in place until soft-deleted.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Alert data (product, area, threshold)
///
/// # Returns
/// - `200 OK` - The created alert
/// - `400 Bad Request` - A field bound is violated
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/alerts",
    tag = ALERT_TAG,
    request_body = CreateAlertDto,
    responses(
        (status = 200, description = "Successfully created alert", body = AlertDto),
        (status = 400, description = "Invalid alert data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_alert(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateAlertDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let alert = AlertService::new(&state.db).create(&user, payload).await?;

    Ok(Json(alert))
}

/// List the caller's active alerts.
///
/// Returns only alerts owned by the authenticated user; soft-deleted alerts
/// are excluded.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - The caller's active alerts
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/alerts",
    tag = ALERT_TAG,
    responses(
        (status = 200, description = "The caller's active alerts", body = Vec<AlertDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_alerts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let alerts = AlertService::new(&state.db).list(&user).await?;

    Ok(Json(alerts))
}

/// Soft-delete one of the caller's alerts.
///
/// The alert's active flag is cleared; the row is never physically removed.
/// An alert belonging to another user reports not found.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `alert_id` - The alert id path segment
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `400 Bad Request` - The id is not a valid integer
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No matching active alert owned by the caller
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/alerts/{alert_id}",
    tag = ALERT_TAG,
    params(
        ("alert_id" = String, Path, description = "Alert id")
    ),
    responses(
        (status = 200, description = "Successfully deleted alert", body = MessageDto),
        (status = 400, description = "Invalid alert id", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Alert not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_alert(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(alert_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let confirmation = AlertService::new(&state.db).delete(&user, &alert_id).await?;

    Ok(Json(confirmation))
}
