use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::model::product::Product;

/// Lifecycle state of an order.
///
/// Orders are always created as `Pending`; later transitions are driven by
/// fulfilment processes outside this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Returns the canonical string stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Parses the stored database string back into the enum.
    pub fn from_str_opt(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(OrderStatus::Pending),
            "completed" => Some(OrderStatus::Completed),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order placement request body.
#[derive(Deserialize, ToSchema)]
pub struct CreateOrderDto {
    pub product: Product,
    pub area: String,
    /// Ordered quantity in gallons. Must be strictly positive.
    pub quantity: i32,
    /// Price the buyer is willing to pay. Must be strictly positive.
    pub target_price: f64,
    /// Optional delivery location.
    #[serde(default)]
    pub location: Option<String>,
}

/// Order response body.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub product: Product,
    pub area: String,
    pub quantity: i32,
    pub target_price: f64,
    pub location: Option<String>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}
