// Main entry point for the community site API server

use std::sync::Arc;

use anyhow::{Context, Result};
use server_core::kernel::HostedStorageClient;
use server_core::server::build_app;
use server_core::{domains, Config};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Dasi Hakgyo community site API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Run migrations
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations complete");

    // Seed default members and meetings on an empty database
    domains::seed::seed_database(&pool)
        .await
        .context("Failed to seed database")?;

    // Storage client is optional: without credentials, uploads are disabled
    // and /api/check-env reports unconfigured.
    let storage = match (&config.storage_url, &config.storage_key) {
        (Some(url), Some(key)) => {
            let client: Arc<dyn server_core::kernel::BaseObjectStorage> =
                Arc::new(HostedStorageClient::new(url.clone(), key.clone()));
            Some(client)
        }
        _ => {
            tracing::warn!("Storage credentials missing; image uploads disabled");
            None
        }
    };

    // Build application
    let app = build_app(pool, storage, &config);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
