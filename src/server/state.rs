//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, service::token::TokenService};

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or cloneable types) for
/// each incoming request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `TokenService` holds small derived signing keys
/// - `String` fields are cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for outbound requests to the price feed and Stripe.
    ///
    /// Configured with security settings (no redirects) to prevent SSRF
    /// vulnerabilities, and with bounded connect/read timeouts.
    pub http_client: reqwest::Client,

    /// Service issuing and verifying signed access tokens.
    pub tokens: TokenService,

    /// API key for the external price-index endpoint.
    pub eia_api_key: String,

    /// Base URL of the external price-index endpoint.
    pub eia_price_url: String,

    /// Secret key authenticating requests to the payment processor.
    pub stripe_secret_key: String,

    /// Base URL of the payment processor API.
    pub stripe_api_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized. The resulting state is then
    /// provided to the Axum router for use in request handlers.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for outbound requests
    /// - `config` - Loaded application configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client, config: &Config) -> Self {
        Self {
            db,
            http_client,
            tokens: TokenService::new(&config.jwt_secret),
            eia_api_key: config.eia_api_key.clone(),
            eia_price_url: config.eia_price_url.clone(),
            stripe_secret_key: config.stripe_secret_key.clone(),
            stripe_api_url: config.stripe_api_url.clone(),
        }
    }
}
