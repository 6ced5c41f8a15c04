use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Classified failure of the external price feed after the retry budget is spent.
#[derive(Error, Debug)]
pub enum PriceFeedError {
    /// Upstream answered 429; the caller should retry later.
    #[error("Price feed rate limit exceeded")]
    RateLimited,

    /// Upstream answered another error status, which is passed through.
    #[error("Price feed returned HTTP status {0}")]
    UpstreamStatus(u16),

    /// Network-level failure (timeout, connection refused) after exhausting retries.
    #[error("Price feed unreachable: {0}")]
    Unavailable(String),
}

/// Converts price feed failures into HTTP responses.
///
/// # Returns
/// - 429 Too Many Requests - Upstream rate limiting
/// - upstream status - Other upstream HTTP errors (502 if the code is not a
///   valid status)
/// - 503 Service Unavailable - Network-level failures
impl IntoResponse for PriceFeedError {
    fn into_response(self) -> Response {
        match self {
            Self::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                Json(ErrorDto {
                    error: "Rate limit exceeded. Please try again later.".to_string(),
                }),
            )
                .into_response(),
            Self::UpstreamStatus(code) => {
                let status =
                    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY);
                (
                    status,
                    Json(ErrorDto {
                        error: "Failed to fetch prices from EIA".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Unavailable(reason) => {
                tracing::warn!("Price feed unavailable: {}", reason);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto {
                        error: "EIA service temporarily unavailable. Please try again in a few minutes."
                            .to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
