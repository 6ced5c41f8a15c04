//! Order factory for creating test order entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
///
/// Orders must belong to an existing user, so the owning user id is a required
/// constructor argument rather than a default.
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    product: String,
    area: String,
    quantity: i32,
    target_price: f64,
    location: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - product: `"Diesel"`
    /// - area: `"Area {id}"` where id is auto-incremented
    /// - quantity: `100`
    /// - target_price: `3.25`
    /// - location: `None`
    /// - status: `"pending"`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of the user placing the order
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            product: "Diesel".to_string(),
            area: format!("Area {}", id),
            quantity: 100,
            target_price: 3.25,
            location: None,
            status: "pending".to_string(),
            created_at: Utc::now(),
        }
    }

    /// Sets the product (`"Diesel"` or `"Gasoline"`).
    pub fn product(mut self, product: impl Into<String>) -> Self {
        self.product = product.into();
        self
    }

    /// Sets the area the order targets.
    pub fn area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }

    /// Sets the ordered quantity.
    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the target price.
    pub fn target_price(mut self, target_price: f64) -> Self {
        self.target_price = target_price;
        self
    }

    /// Sets the optional delivery location.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the order status (`"pending"`, `"completed"` or `"cancelled"`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the creation timestamp.
    ///
    /// Useful for tests asserting newest-first ordering of order listings.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the order entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::order::Model)` - Created order entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            product: ActiveValue::Set(self.product),
            area: ActiveValue::Set(self.area),
            quantity: ActiveValue::Set(self.quantity),
            target_price: ActiveValue::Set(self.target_price),
            location: ActiveValue::Set(self.location),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending order owned by the given user with default values.
///
/// Shorthand for `OrderFactory::new(db, user_id).build().await`.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, user_id).build().await
}
