//! HTTP request handlers.
//!
//! Controllers extract and validate request data, resolve the caller's
//! identity where required, delegate to services, and shape responses.

pub mod alert;
pub mod auth;
pub mod health;
pub mod order;
pub mod payment;
pub mod price;
