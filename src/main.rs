mod model;
mod server;

use std::net::SocketAddr;

use crate::server::{config::Config, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), server::error::AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fuelwatch=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    tracing::info!("Starting server on {}", config.bind_address);

    let state = AppState::new(db, http_client, &config);
    let router = server::router::router(&config)?.with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    // Peer addresses are needed by the per-route rate limit layers.
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
