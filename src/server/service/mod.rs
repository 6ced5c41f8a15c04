//! Business logic services.
//!
//! Services sit between controllers and repositories: they validate inputs,
//! enforce ownership scoping, and talk to external processors. Controllers
//! stay thin and repositories stay dumb.

pub mod alert;
pub mod auth;
pub mod order;
pub mod password;
pub mod payment;
pub mod price;
pub mod token;
