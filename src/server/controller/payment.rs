use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        payment::{CreatePaymentIntentDto, PaymentIntentDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::payment::StripeService,
        state::AppState,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payments";

/// Create a payment intent.
///
/// Delegates to the payment processor with the caller's identity attached in
/// metadata and returns the intent's client secret for the frontend to
/// complete the payment. The call is never retried.
///
/// # Arguments
/// - `state` - Application state containing the outbound HTTP client
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Payment data (amount in cents)
///
/// # Returns
/// - `200 OK` - The intent's client secret
/// - `400 Bad Request` - Non-positive amount or processor-reported error
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Unreachable processor or malformed response
#[utoipa::path(
    post,
    path = "/payments/create-intent",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentIntentDto,
    responses(
        (status = 200, description = "Successfully created payment intent", body = PaymentIntentDto),
        (status = 400, description = "Invalid amount or processor error", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePaymentIntentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let intent = StripeService::new(
        &state.http_client,
        &state.stripe_api_url,
        &state.stripe_secret_key,
    )
    .create_intent(payload.amount, &user)
    .await?;

    Ok(Json(intent))
}
