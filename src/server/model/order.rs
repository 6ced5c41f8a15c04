//! Order domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        order::{OrderDto, OrderStatus},
        product::Product,
    },
    server::error::AppError,
};

/// Purchase order owned by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub product: Product,
    pub area: String,
    pub quantity: i32,
    pub target_price: f64,
    pub location: Option<String>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Converts the order domain model to a DTO for API responses.
    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            product: self.product,
            area: self.area,
            quantity: self.quantity,
            target_price: self.target_price,
            location: self.location,
            status: self.status,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to an order domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Order)` - The converted order domain model
    /// - `Err(AppError::InternalError)` - The stored product or status string is unknown
    pub fn from_entity(entity: entity::order::Model) -> Result<Self, AppError> {
        let product = Product::from_str_opt(&entity.product).ok_or_else(|| {
            AppError::InternalError(format!(
                "Unknown product '{}' stored for order {}",
                entity.product, entity.id
            ))
        })?;
        let status = OrderStatus::from_str_opt(&entity.status).ok_or_else(|| {
            AppError::InternalError(format!(
                "Unknown status '{}' stored for order {}",
                entity.status, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            product,
            area: entity.area,
            quantity: entity.quantity,
            target_price: entity.target_price,
            location: entity.location,
            status,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for placing an order, scoped to the owning user.
///
/// Status is not a parameter; orders are always created as `pending`.
#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub user_id: i32,
    pub product: Product,
    pub area: String,
    pub quantity: i32,
    pub target_price: f64,
    pub location: Option<String>,
}
