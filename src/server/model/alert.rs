//! Price alert domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::{alert::AlertDto, product::Product},
    server::error::AppError,
};

/// Price alert owned by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceAlert {
    pub id: i32,
    pub user_id: i32,
    pub product: Product,
    pub area: String,
    pub threshold: f64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl PriceAlert {
    /// Converts the alert domain model to a DTO for API responses.
    ///
    /// The owning user id and active flag are internal bookkeeping and are
    /// not part of the response shape.
    pub fn into_dto(self) -> AlertDto {
        AlertDto {
            id: self.id,
            product: self.product,
            area: self.area,
            threshold: self.threshold,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to an alert domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(PriceAlert)` - The converted alert domain model
    /// - `Err(AppError::InternalError)` - The stored product string is not a known product
    pub fn from_entity(entity: entity::price_alert::Model) -> Result<Self, AppError> {
        let product = Product::from_str_opt(&entity.product).ok_or_else(|| {
            AppError::InternalError(format!(
                "Unknown product '{}' stored for alert {}",
                entity.product, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            product,
            area: entity.area,
            threshold: entity.threshold,
            active: entity.active,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for creating a price alert, scoped to the owning user.
#[derive(Debug, Clone)]
pub struct CreateAlertParams {
    pub user_id: i32,
    pub product: Product,
    pub area: String,
    pub threshold: f64,
}
