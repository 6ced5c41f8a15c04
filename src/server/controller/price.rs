use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};

use crate::{
    model::api::ErrorDto,
    server::{
        error::AppError, middleware::auth::AuthGuard, service::price::PriceFeedService,
        state::AppState,
    },
};

/// Tag for grouping price endpoints in OpenAPI documentation
pub static PRICE_TAG: &str = "prices";

/// Fetch the latest fuel price dataset.
///
/// Proxies the external price index's weekly dataset through unmodified.
/// Transient upstream failures are retried with exponential backoff before
/// an error is reported.
///
/// # Arguments
/// - `state` - Application state containing the outbound HTTP client
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - The upstream JSON payload
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `429 Too Many Requests` - Upstream rate limit exhausted
/// - `503 Service Unavailable` - Upstream unreachable
#[utoipa::path(
    get,
    path = "/prices",
    tag = PRICE_TAG,
    responses(
        (status = 200, description = "Latest weekly price dataset", body = serde_json::Value),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 429, description = "Upstream rate limit exhausted", body = ErrorDto),
        (status = 503, description = "Upstream unreachable", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_prices(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let prices = PriceFeedService::new(&state.http_client, &state.eia_price_url, &state.eia_api_key)
        .fetch_prices()
        .await?;

    Ok(Json(prices))
}
