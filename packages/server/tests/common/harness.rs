//! Test harness with testcontainers for integration testing.
//!
//! Uses a shared Postgres container across all tests for dramatically
//! improved performance. The container and migrations are initialized once on
//! first use, then reused; each test gets a fresh pool, app, and temp image
//! folders.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

use server_core::kernel::test_dependencies::MemoryObjectStorage;
use server_core::kernel::BaseObjectStorage;
use server_core::server::build_app;
use server_core::Config;

use super::http::TestClient;

/// Shared test infrastructure that persists across all tests.
struct SharedTestInfra {
    db_url: String,
    // Keep the container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

/// Global shared infrastructure - initialized once, reused by all tests.
static SHARED_INFRA: OnceCell<SharedTestInfra> = OnceCell::const_new();

impl SharedTestInfra {
    async fn init() -> Result<Self> {
        // Respect RUST_LOG; try_init avoids panicking if already initialized.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let postgres = Postgres::default()
            .with_tag("16")
            .with_cmd(["-c", "max_connections=200"])
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let pg_host = postgres.get_host().await?;
        let pg_port = postgres.get_host_port_ipv4(5432).await?;
        let db_url = format!(
            "postgresql://postgres:postgres@{}:{}/postgres",
            pg_host, pg_port
        );

        // Run migrations once on the shared database
        let pool = PgPool::connect(&db_url)
            .await
            .context("Failed to connect to Postgres for migrations")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;

        Ok(Self {
            db_url,
            _postgres: postgres,
        })
    }

    async fn get() -> &'static Self {
        SHARED_INFRA
            .get_or_init(|| async {
                Self::init()
                    .await
                    .expect("Failed to initialize shared test infrastructure")
            })
            .await
    }
}

/// Per-test context: fresh pool, in-memory storage, and temp image folders,
/// all sharing the one containerized database.
pub struct TestHarness {
    pub db_pool: PgPool,
    pub storage: Arc<MemoryObjectStorage>,
    pub public_dir: tempfile::TempDir,
    pub source_dir: tempfile::TempDir,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().await.expect("Failed to create test harness")
    }

    async fn teardown(self) {
        // Database pool is automatically dropped
    }
}

impl TestHarness {
    pub async fn new() -> Result<Self> {
        let infra = SharedTestInfra::get().await;

        let db_pool = PgPool::connect(&infra.db_url)
            .await
            .context("Failed to connect to test database")?;

        Ok(Self {
            db_pool,
            storage: Arc::new(MemoryObjectStorage::new()),
            public_dir: tempfile::tempdir().context("Failed to create public dir")?,
            source_dir: tempfile::tempdir().context("Failed to create source dir")?,
        })
    }

    fn config(&self) -> Config {
        Config {
            database_url: String::new(),
            port: 0,
            storage_url: Some("http://storage.test".to_string()),
            storage_key: Some("test-key".to_string()),
            admin_password: "2025".to_string(),
            public_dir: self.public_dir.path().to_path_buf(),
            member_image_source_dir: Some(self.source_dir.path().to_path_buf()),
            allowed_origins: Vec::new(),
        }
    }

    /// Build the full application router backed by this harness.
    pub fn app(&self) -> Router {
        let storage: Arc<dyn BaseObjectStorage> = self.storage.clone();
        build_app(self.db_pool.clone(), Some(storage), &self.config())
    }

    /// Build an app whose storage is unconfigured (uploads disabled).
    pub fn app_without_storage(&self) -> Router {
        let mut config = self.config();
        config.storage_url = None;
        config.storage_key = None;
        build_app(self.db_pool.clone(), None, &config)
    }

    /// HTTP client driving the router directly (no sockets).
    pub fn client(&self) -> TestClient {
        TestClient::new(self.app())
    }

    /// Drop a placeholder image file into the public folder.
    pub fn add_public_image(&self, name: &str) {
        std::fs::write(self.public_dir.path().join(name), b"fake image bytes")
            .expect("Failed to write test image");
    }

    /// Drop a placeholder image file into the sync source folder.
    pub fn add_source_image(&self, name: &str) {
        std::fs::write(self.source_dir.path().join(name), b"fake image bytes")
            .expect("Failed to write test image");
    }
}
