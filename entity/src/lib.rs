pub mod order;
pub mod price_alert;
pub mod user;

pub mod prelude {
    pub use super::order::Entity as Order;
    pub use super::price_alert::Entity as PriceAlert;
    pub use super::user::Entity as User;
}
