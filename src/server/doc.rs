//! OpenAPI documentation assembly.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

/// Aggregated OpenAPI document for all endpoints.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::controller::auth::register,
        crate::server::controller::auth::login,
        crate::server::controller::auth::login_json,
        crate::server::controller::alert::create_alert,
        crate::server::controller::alert::get_alerts,
        crate::server::controller::alert::delete_alert,
        crate::server::controller::order::create_order,
        crate::server::controller::order::get_orders,
        crate::server::controller::price::get_prices,
        crate::server::controller::payment::create_payment_intent,
        crate::server::controller::health::health_check,
    ),
    components(schemas(
        crate::model::api::ErrorDto,
        crate::model::api::MessageDto,
        crate::model::api::HealthDto,
        crate::model::user::UserRole,
        crate::model::user::RegisterUserDto,
        crate::model::user::LoginDto,
        crate::model::user::LoginFormDto,
        crate::model::user::UserDto,
        crate::model::user::TokenDto,
        crate::model::product::Product,
        crate::model::alert::CreateAlertDto,
        crate::model::alert::AlertDto,
        crate::model::order::OrderStatus,
        crate::model::order::CreateOrderDto,
        crate::model::order::OrderDto,
        crate::model::payment::CreatePaymentIntentDto,
        crate::model::payment::PaymentIntentDto,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "alerts", description = "Price alert management"),
        (name = "orders", description = "Order placement and history"),
        (name = "prices", description = "Proxied fuel price index"),
        (name = "payments", description = "Payment intent creation"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Registers the bearer token security scheme referenced by protected paths.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
