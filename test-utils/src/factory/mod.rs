//! Entity factories for constructing test data.
//!
//! Each factory inserts a row with sensible defaults and exposes builder-style
//! setters for overriding individual fields in specific test scenarios.

pub mod helpers;
pub mod order;
pub mod price_alert;
pub mod user;
