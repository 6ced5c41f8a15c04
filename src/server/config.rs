use crate::server::error::{config::ConfigError, AppError};

const EIA_PRICE_URL: &str = "https://api.eia.gov/v2/petroleum/pri/gnd/data/";
const STRIPE_API_URL: &str = "https://api.stripe.com";

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

/// Immutable process-wide configuration, loaded once at startup.
pub struct Config {
    pub database_url: String,

    /// Secret used to sign and verify access tokens. Rotating it invalidates
    /// every previously issued token.
    pub jwt_secret: String,
    pub stripe_secret_key: String,
    pub eia_api_key: String,

    pub eia_price_url: String,
    pub stripe_api_url: String,

    /// Origins allowed by the CORS layer.
    pub allowed_origins: Vec<String>,
    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            stripe_secret_key: std::env::var("STRIPE_SECRET_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("STRIPE_SECRET_KEY".to_string()))?,
            eia_api_key: std::env::var("EIA_API_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("EIA_API_KEY".to_string()))?,
            eia_price_url: EIA_PRICE_URL.to_string(),
            stripe_api_url: STRIPE_API_URL.to_string(),
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}
