//! API data transfer objects shared by all endpoints.
//!
//! These types define the JSON request and response bodies of the HTTP surface.
//! Domain models live in `server::model`; the DTOs here are the only shapes
//! that cross the wire.

pub mod alert;
pub mod api;
pub mod order;
pub mod payment;
pub mod product;
pub mod user;
