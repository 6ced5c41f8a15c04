//! Price alert factory for creating test alert entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test price alerts with customizable fields.
///
/// Alerts must belong to an existing user, so the owning user id is a required
/// constructor argument rather than a default.
pub struct PriceAlertFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    product: String,
    area: String,
    threshold: f64,
    active: bool,
}

impl<'a> PriceAlertFactory<'a> {
    /// Creates a new PriceAlertFactory with default values.
    ///
    /// Defaults:
    /// - product: `"Diesel"`
    /// - area: `"Area {id}"` where id is auto-incremented
    /// - threshold: `3.5`
    /// - active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of the user owning the alert
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            product: "Diesel".to_string(),
            area: format!("Area {}", id),
            threshold: 3.5,
            active: true,
        }
    }

    /// Sets the product (`"Diesel"` or `"Gasoline"`).
    pub fn product(mut self, product: impl Into<String>) -> Self {
        self.product = product.into();
        self
    }

    /// Sets the area the alert watches.
    pub fn area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }

    /// Sets the price threshold.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets whether the alert is active.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the price alert entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::price_alert::Model)` - Created alert entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::price_alert::Model, DbErr> {
        entity::price_alert::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            product: ActiveValue::Set(self.product),
            area: ActiveValue::Set(self.area),
            threshold: ActiveValue::Set(self.threshold),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active alert owned by the given user with default values.
///
/// Shorthand for `PriceAlertFactory::new(db, user_id).build().await`.
pub async fn create_alert(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::price_alert::Model, DbErr> {
    PriceAlertFactory::new(db, user_id).build().await
}
