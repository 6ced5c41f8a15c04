//! Data access repositories.
//!
//! Repositories own all SeaORM queries and return domain models, keeping
//! entity types out of the service layer. Each repository borrows the shared
//! database connection for the duration of a request.

pub mod alert;
pub mod order;
pub mod user;

#[cfg(test)]
mod test;
