//! Price alert management.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        alert::{AlertDto, CreateAlertDto},
        api::MessageDto,
    },
    server::{
        data::alert::AlertRepository,
        error::AppError,
        model::{alert::CreateAlertParams, user::User},
        util::parse::parse_id,
    },
};

/// Service for managing a user's price alerts.
pub struct AlertService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlertService<'a> {
    /// Creates a new alert service.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a price alert for the given user.
    ///
    /// The product enumeration is already enforced by deserialization; this
    /// validates the remaining field bounds before persisting.
    ///
    /// # Arguments
    /// - `user` - The authenticated owner
    /// - `dto` - The alert creation request
    ///
    /// # Returns
    /// - `Ok(AlertDto)` - The created alert
    /// - `Err(AppError::BadRequest)` - A field bound is violated
    /// - `Err(AppError)` - Database error during insertion
    pub async fn create(&self, user: &User, dto: CreateAlertDto) -> Result<AlertDto, AppError> {
        if dto.area.is_empty() || dto.area.chars().count() > 100 {
            return Err(AppError::BadRequest(
                "Area must be between 1 and 100 characters".to_string(),
            ));
        }
        if dto.threshold <= 0.0 {
            return Err(AppError::BadRequest(
                "Threshold must be greater than 0".to_string(),
            ));
        }

        let alert = AlertRepository::new(self.db)
            .create(CreateAlertParams {
                user_id: user.id,
                product: dto.product,
                area: dto.area,
                threshold: dto.threshold,
            })
            .await?;

        Ok(alert.into_dto())
    }

    /// Lists the user's active alerts.
    ///
    /// # Returns
    /// - `Ok(Vec<AlertDto>)` - The caller's active alerts
    /// - `Err(AppError)` - Database error during the query
    pub async fn list(&self, user: &User) -> Result<Vec<AlertDto>, AppError> {
        let alerts = AlertRepository::new(self.db)
            .get_active_for_user(user.id)
            .await?;

        Ok(alerts.into_iter().map(|alert| alert.into_dto()).collect())
    }

    /// Soft-deletes one of the user's alerts.
    ///
    /// A foreign alert reports not found rather than forbidden, so record ids
    /// cannot be probed across users.
    ///
    /// # Arguments
    /// - `user` - The authenticated owner
    /// - `raw_id` - The raw alert id path segment
    ///
    /// # Returns
    /// - `Ok(MessageDto)` - Confirmation message
    /// - `Err(AppError::BadRequest)` - The id is not a valid integer
    /// - `Err(AppError::NotFound)` - No matching active alert owned by the user
    pub async fn delete(&self, user: &User, raw_id: &str) -> Result<MessageDto, AppError> {
        let alert_id = parse_id(raw_id, "alert")?;

        let deleted = AlertRepository::new(self.db)
            .soft_delete(user.id, alert_id)
            .await?;

        if !deleted {
            return Err(AppError::NotFound("Alert not found".to_string()));
        }

        Ok(MessageDto {
            message: "Alert deleted".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::product::Product;
    use test_utils::{builder::TestBuilder, factory::user::create_user};

    fn dto(area: &str, threshold: f64) -> CreateAlertDto {
        CreateAlertDto {
            product: Product::Diesel,
            area: area.to_string(),
            threshold,
        }
    }

    async fn fixture_user(db: &DatabaseConnection) -> Result<User, AppError> {
        let user = create_user(db).await?;
        User::from_entity(user)
    }

    #[tokio::test]
    async fn rejects_empty_area() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = fixture_user(db).await?;

        let result = AlertService::new(db).create(&user, dto("", 3.5)).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn area_bound_counts_characters_not_bytes() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = fixture_user(db).await?;

        let service = AlertService::new(db);

        let within = dto(&"ü".repeat(100), 3.5);
        assert!(service.create(&user, within).await.is_ok());

        let over = dto(&"ü".repeat(101), 3.5);
        assert!(matches!(
            service.create(&user, over).await,
            Err(AppError::BadRequest(_))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn rejects_non_positive_threshold() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = fixture_user(db).await?;

        let result = AlertService::new(db).create(&user, dto("PADD 1", 0.0)).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn delete_rejects_malformed_id() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = fixture_user(db).await?;

        let result = AlertService::new(db).delete(&user, "abc").await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn delete_reports_not_found_for_unknown_id() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = fixture_user(db).await?;

        let result = AlertService::new(db).delete(&user, "4040").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    #[tokio::test]
    async fn creates_and_lists_alert() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = fixture_user(db).await?;

        let service = AlertService::new(db);
        let created = service.create(&user, dto("PADD 1", 3.89)).await?;
        let listed = service.list(&user).await?;

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);

        Ok(())
    }
}
