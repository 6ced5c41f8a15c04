//! Domain models and operation parameter types.
//!
//! Repositories convert SeaORM entity models into these domain models at the
//! infrastructure boundary; controllers convert them into DTOs for responses.
//! Parameter structs capture validated inputs for create operations.

pub mod alert;
pub mod order;
pub mod user;
