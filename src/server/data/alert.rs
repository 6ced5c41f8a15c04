use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use entity::prelude::PriceAlert as PriceAlertEntity;

use crate::server::{
    error::AppError,
    model::alert::{CreateAlertParams, PriceAlert},
};

/// Repository for price alert persistence operations.
///
/// Every read and mutation is scoped by the owning user id; there is no
/// unscoped lookup, so a caller can never observe another user's alerts.
pub struct AlertRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlertRepository<'a> {
    /// Creates a new alert repository.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new alert row for the owning user.
    ///
    /// # Returns
    /// - `Ok(PriceAlert)` - The created alert with its assigned id, active by default
    /// - `Err(AppError)` - Database error during insertion
    pub async fn create(&self, params: CreateAlertParams) -> Result<PriceAlert, AppError> {
        let alert = entity::price_alert::ActiveModel {
            user_id: Set(params.user_id),
            product: Set(params.product.as_str().to_string()),
            area: Set(params.area),
            threshold: Set(params.threshold),
            active: Set(true),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        PriceAlert::from_entity(alert)
    }

    /// Lists the user's active alerts.
    ///
    /// Soft-deleted alerts (active = false) are excluded.
    ///
    /// # Returns
    /// - `Ok(Vec<PriceAlert>)` - The user's active alerts, oldest first
    /// - `Err(AppError)` - Database error during the query
    pub async fn get_active_for_user(&self, user_id: i32) -> Result<Vec<PriceAlert>, AppError> {
        let alerts = PriceAlertEntity::find()
            .filter(entity::price_alert::Column::UserId.eq(user_id))
            .filter(entity::price_alert::Column::Active.eq(true))
            .order_by_asc(entity::price_alert::Column::Id)
            .all(self.db)
            .await?;

        alerts.into_iter().map(PriceAlert::from_entity).collect()
    }

    /// Soft-deletes an alert by flipping its active flag.
    ///
    /// The lookup is scoped to the owning user and to active alerts, so a
    /// foreign or already-deleted alert behaves exactly like a missing one.
    ///
    /// # Arguments
    /// - `user_id` - The owning user's id
    /// - `alert_id` - The alert to delete
    ///
    /// # Returns
    /// - `Ok(true)` - The alert existed, belonged to the user, and was deactivated
    /// - `Ok(false)` - No matching active alert
    /// - `Err(AppError)` - Database error during lookup or update
    pub async fn soft_delete(&self, user_id: i32, alert_id: i32) -> Result<bool, AppError> {
        let alert = PriceAlertEntity::find_by_id(alert_id)
            .filter(entity::price_alert::Column::UserId.eq(user_id))
            .filter(entity::price_alert::Column::Active.eq(true))
            .one(self.db)
            .await?;

        let Some(alert) = alert else {
            return Ok(false);
        };

        let mut alert: entity::price_alert::ActiveModel = alert.into();
        alert.active = Set(false);
        alert.update(self.db).await?;

        Ok(true)
    }
}
