//! Server startup: env, logging, pool, schema bootstrap, listen.

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use vanfleet::{api_routes, ensure_schema, AppState, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("vanfleet=info")),
        )
        .init();

    let config = Config::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    ensure_schema(&pool).await?;

    let port = config.port;
    let state = AppState::new(pool, config);
    let app = api_routes(state);

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "vanfleet listening");
    axum::serve(listener, app).await?;
    Ok(())
}
