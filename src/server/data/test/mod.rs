//! Repository tests against an in-memory SQLite database.

mod alert;
mod order;
mod user;
