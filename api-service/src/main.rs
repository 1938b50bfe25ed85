mod error;
mod handlers;
// Keep models for request/response types
mod models;
mod routes;
mod services;

#[cfg(test)]
mod tests;

use dotenv::dotenv;
use tokio::net::TcpListener;

use mentorize_shared::config::AppConfig;
use mentorize_shared::store::postgres;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    // Initialize tracing with enhanced configuration
    let log_level =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info,mentorize_api_service=debug".into());

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(true) // Include the target (module path) in logs
        .init();

    tracing::info!(
        "Logging initialized at level: {}",
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into())
    );

    let config = AppConfig::from_env()?;

    let pool = postgres::connect(&config.database_url).await?;
    sqlx::migrate!("../migrations").run(&pool).await?;
    tracing::info!("Connected to Postgres and applied migrations");

    let app = routes::create_router(pool, &config);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Mentorize API listening on {}", addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
