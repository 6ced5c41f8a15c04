//! Order placement and listing.

use sea_orm::DatabaseConnection;

use crate::{
    model::order::{CreateOrderDto, OrderDto},
    server::{
        data::order::OrderRepository,
        error::AppError,
        model::{order::CreateOrderParams, user::User},
    },
};

/// Service for managing a user's orders.
pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    /// Creates a new order service.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places an order for the given user.
    ///
    /// Orders are always created in the `pending` state.
    ///
    /// # Arguments
    /// - `user` - The authenticated buyer
    /// - `dto` - The order placement request
    ///
    /// # Returns
    /// - `Ok(OrderDto)` - The created order
    /// - `Err(AppError::BadRequest)` - A field bound is violated
    /// - `Err(AppError)` - Database error during insertion
    pub async fn create(&self, user: &User, dto: CreateOrderDto) -> Result<OrderDto, AppError> {
        if dto.area.is_empty() || dto.area.chars().count() > 100 {
            return Err(AppError::BadRequest(
                "Area must be between 1 and 100 characters".to_string(),
            ));
        }
        if dto.quantity <= 0 {
            return Err(AppError::BadRequest(
                "Quantity must be greater than 0".to_string(),
            ));
        }
        if dto.target_price <= 0.0 {
            return Err(AppError::BadRequest(
                "Target price must be greater than 0".to_string(),
            ));
        }
        if let Some(location) = &dto.location {
            if location.chars().count() > 200 {
                return Err(AppError::BadRequest(
                    "Location must be at most 200 characters".to_string(),
                ));
            }
        }

        let order = OrderRepository::new(self.db)
            .create(CreateOrderParams {
                user_id: user.id,
                product: dto.product,
                area: dto.area,
                quantity: dto.quantity,
                target_price: dto.target_price,
                location: dto.location,
            })
            .await?;

        Ok(order.into_dto())
    }

    /// Lists the user's orders, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<OrderDto>)` - The caller's orders ordered by creation time descending
    /// - `Err(AppError)` - Database error during the query
    pub async fn list(&self, user: &User) -> Result<Vec<OrderDto>, AppError> {
        let orders = OrderRepository::new(self.db).get_for_user(user.id).await?;

        Ok(orders.into_iter().map(|order| order.into_dto()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{order::OrderStatus, product::Product};
    use test_utils::{builder::TestBuilder, factory::user::create_user};

    fn dto(quantity: i32, target_price: f64) -> CreateOrderDto {
        CreateOrderDto {
            product: Product::Diesel,
            area: "PADD 3".to_string(),
            quantity,
            target_price,
            location: None,
        }
    }

    async fn fixture_user(db: &DatabaseConnection) -> Result<User, AppError> {
        let user = create_user(db).await?;
        User::from_entity(user)
    }

    #[tokio::test]
    async fn rejects_non_positive_quantity() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = fixture_user(db).await?;

        let result = OrderService::new(db).create(&user, dto(0, 3.5)).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn rejects_non_positive_target_price() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = fixture_user(db).await?;

        let result = OrderService::new(db).create(&user, dto(100, -1.0)).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn rejects_oversized_location() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = fixture_user(db).await?;

        let mut request = dto(100, 3.5);
        request.location = Some("x".repeat(201));

        let result = OrderService::new(db).create(&user, request).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn location_bound_counts_characters_not_bytes() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = fixture_user(db).await?;

        let service = OrderService::new(db);

        let mut within = dto(100, 3.5);
        within.location = Some("ü".repeat(200));
        assert!(service.create(&user, within).await.is_ok());

        let mut over = dto(100, 3.5);
        over.location = Some("ü".repeat(201));
        assert!(matches!(
            service.create(&user, over).await,
            Err(AppError::BadRequest(_))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn created_order_is_pending() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = fixture_user(db).await?;

        let order = OrderService::new(db).create(&user, dto(100, 3.5)).await?;

        assert_eq!(order.status, OrderStatus::Pending);

        Ok(())
    }
}
