use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payment intent creation request body.
#[derive(Deserialize, ToSchema)]
pub struct CreatePaymentIntentDto {
    /// Amount in minor currency units (cents). Must be strictly positive.
    pub amount: i64,
}

/// Payment intent response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentIntentDto {
    /// Client secret used by the frontend to confirm the intent.
    pub client_secret: String,
}
