//! Route table, rate limits, and CORS policy.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        alert::{create_alert, delete_alert, get_alerts},
        auth::{login, login_json, register},
        health::health_check,
        order::{create_order, get_orders},
        payment::create_payment_intent,
        price::get_prices,
    },
    doc::ApiDoc,
    error::AppError,
    state::AppState,
};

/// Builds the CORS policy from the configured origin allowlist.
///
/// Origins, methods, and headers are listed explicitly; wildcard origins
/// cannot be combined with credentials.
fn cors(config: &Config) -> Result<CorsLayer, AppError> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| {
                AppError::InternalError(format!("Invalid allowed origin: {}", origin))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true))
}

/// Assembles the application router.
///
/// Registration, login, and the price proxy carry per-client rate limits
/// (5/min, 10/min, and 30/min respectively), keyed by the client's peer
/// address; everything else is unlimited. Swagger UI is served at `/docs`.
///
/// # Arguments
/// - `config` - Loaded application configuration
///
/// # Returns
/// - `Ok(Router<AppState>)` - The assembled router, awaiting state
/// - `Err(AppError)` - Invalid rate limiter or CORS configuration
pub fn router(config: &Config) -> Result<Router<AppState>, AppError> {
    // Replenishes one permit per interval; each route gets its own bucket.
    let rate_limit = |replenish_secs: u64, burst: u32| {
        GovernorConfigBuilder::default()
            .per_second(replenish_secs)
            .burst_size(burst)
            .finish()
            .map(Arc::new)
            .ok_or_else(|| {
                AppError::InternalError("Invalid rate limiter configuration".to_string())
            })
    };

    let router = Router::new()
        .route(
            "/auth/register",
            post(register).layer(GovernorLayer::new(rate_limit(12, 5)?)),
        )
        .route(
            "/auth/login",
            post(login).layer(GovernorLayer::new(rate_limit(6, 10)?)),
        )
        .route(
            "/auth/login/json",
            post(login_json).layer(GovernorLayer::new(rate_limit(6, 10)?)),
        )
        .route(
            "/prices",
            get(get_prices).layer(GovernorLayer::new(rate_limit(2, 30)?)),
        )
        .route("/alerts", post(create_alert).get(get_alerts))
        .route("/alerts/{alert_id}", delete(delete_alert))
        .route("/orders", post(create_order).get(get_orders))
        .route("/payments/create-intent", post(create_payment_intent))
        .route("/health", get(health_check))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors(config)?);

    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            database_url: "postgres://localhost/test".to_string(),
            jwt_secret: "test-secret".to_string(),
            stripe_secret_key: "sk_test".to_string(),
            eia_api_key: "test-key".to_string(),
            eia_price_url: "http://localhost/prices".to_string(),
            stripe_api_url: "http://localhost".to_string(),
            allowed_origins: vec!["http://localhost:3000".to_string()],
            bind_address: "127.0.0.1:0".to_string(),
        }
    }

    #[test]
    fn assembles_router_with_limits_and_cors() {
        assert!(router(&test_config()).is_ok());
    }

    #[test]
    fn rejects_invalid_allowed_origin() {
        let mut config = test_config();
        config.allowed_origins = vec!["not a header\nvalue".to_string()];

        assert!(matches!(cors(&config), Err(AppError::InternalError(_))));
    }
}
