//! Tablebook - Application Entry Point
//!
//! This is the main entry point for the Tablebook server.

use std::net::SocketAddr;

use axum::{middleware, Router};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tablebook::{
    config::CONFIG,
    db,
    handlers,
    middleware::logging::logging_middleware,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Tablebook server...");

    // Initialize database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = PgPoolOptions::new()
        .max_connections(CONFIG.database.max_connections)
        .connect(&CONFIG.database.url)
        .await?;

    // Run database migrations
    tracing::info!("Running database migrations...");
    db::run_migrations(&db_pool).await?;

    // Ensure the initial admin account exists
    db::seed::ensure_admin(&db_pool, &CONFIG.seed)
        .await
        .map_err(|e| anyhow::anyhow!("Admin seeding failed: {}", e))?;

    // Create application state
    let state = AppState::new(db_pool, CONFIG.clone());

    // Build the router
    let app = Router::new()
        .nest("/api/v1", handlers::routes(state.clone()))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
