use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use entity::prelude::Order as OrderEntity;

use crate::{
    model::order::OrderStatus,
    server::{
        error::AppError,
        model::order::{CreateOrderParams, Order},
    },
};

/// Repository for order persistence operations.
///
/// Like alerts, every query is scoped by the owning user id.
pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    /// Creates a new order repository.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new order row for the owning user.
    ///
    /// Orders always start in the `pending` state; status transitions happen
    /// in fulfilment processes outside this service.
    ///
    /// # Returns
    /// - `Ok(Order)` - The created order with its assigned id
    /// - `Err(AppError)` - Database error during insertion
    pub async fn create(&self, params: CreateOrderParams) -> Result<Order, AppError> {
        let order = entity::order::ActiveModel {
            user_id: Set(params.user_id),
            product: Set(params.product.as_str().to_string()),
            area: Set(params.area),
            quantity: Set(params.quantity),
            target_price: Set(params.target_price),
            location: Set(params.location),
            status: Set(OrderStatus::Pending.as_str().to_string()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Order::from_entity(order)
    }

    /// Lists the user's orders, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Order>)` - The user's orders ordered by creation time descending
    /// - `Err(AppError)` - Database error during the query
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Order>, AppError> {
        let orders = OrderEntity::find()
            .filter(entity::order::Column::UserId.eq(user_id))
            .order_by_desc(entity::order::Column::CreatedAt)
            .all(self.db)
            .await?;

        orders.into_iter().map(Order::from_entity).collect()
    }
}
