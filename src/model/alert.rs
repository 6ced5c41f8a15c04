use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::product::Product;

/// Price alert creation request body.
#[derive(Deserialize, ToSchema)]
pub struct CreateAlertDto {
    pub product: Product,
    pub area: String,
    /// Price threshold that triggers the alert. Must be strictly positive.
    pub threshold: f64,
}

/// Price alert response body.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AlertDto {
    pub id: i32,
    pub product: Product,
    pub area: String,
    pub threshold: f64,
    pub created_at: DateTime<Utc>,
}
