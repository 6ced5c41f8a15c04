use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard error response body.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Standard confirmation response body for operations without a resource payload.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Health check response body.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    /// Overall service status (`"healthy"`).
    pub status: String,
    /// Database connectivity (`"connected"`).
    pub database: String,
}
