use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failure while creating a payment intent with the external processor.
#[derive(Error, Debug)]
pub enum PaymentError {
    /// The processor rejected the request and reported a message.
    #[error("Payment processor error: {0}")]
    Processor(String),

    /// The processor answered with a body this service could not interpret.
    #[error("Unexpected payment processor response: {0}")]
    InvalidResponse(String),
}

/// Converts payment failures into HTTP responses.
///
/// Processor-reported errors surface to the caller with the processor's own
/// message so the frontend can display actionable feedback (card declined,
/// amount too small, etc.). Uninterpretable responses are treated as internal
/// failures and hidden behind a generic message.
///
/// # Returns
/// - 400 Bad Request - Processor-reported errors
/// - 500 Internal Server Error - Malformed processor responses
impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        match self {
            Self::Processor(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
            }
            Self::InvalidResponse(detail) => {
                tracing::error!("Unexpected payment processor response: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
