use axum::{extract::State, response::IntoResponse, Form, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, LoginFormDto, RegisterUserDto, TokenDto, UserDto},
    },
    server::{error::AppError, service::auth::AuthService, state::AppState},
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new user.
///
/// Creates a user account with the submitted name, email, password, and role.
/// The password is hashed before storage and never appears in any response.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Registration data (name, email, password, role)
///
/// # Returns
/// - `200 OK` - The created user, without the password
/// - `400 Bad Request` - Validation failure or email already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 200, description = "Successfully registered user", body = UserDto),
        (status = 400, description = "Validation failure or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db, &state.tokens)
        .register(payload)
        .await?;

    Ok(Json(user))
}

/// Log in with form credentials.
///
/// Accepts the OAuth2 password-grant form shape (`username`, `password`),
/// where `username` carries the email address. On success returns a bearer
/// access token valid for 24 hours alongside the user record.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Form credentials (username = email, password)
///
/// # Returns
/// - `200 OK` - Access token and user
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body(content = LoginFormDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Successfully authenticated", body = TokenDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Form(payload): Form<LoginFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let session = AuthService::new(&state.db, &state.tokens)
        .login(&payload.username, &payload.password)
        .await?;

    Ok(Json(session))
}

/// Log in with JSON credentials.
///
/// Same behavior as the form variant but accepts a JSON body with explicit
/// `email` and `password` fields.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - JSON credentials (email, password)
///
/// # Returns
/// - `200 OK` - Access token and user
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/auth/login/json",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully authenticated", body = TokenDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login_json(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let session = AuthService::new(&state.db, &state.tokens)
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(session))
}
