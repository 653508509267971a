use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Base URL of the hosted object-storage service. Optional: when absent,
    /// uploads fail cleanly and /api/check-env reports unconfigured.
    pub storage_url: Option<String>,
    /// API key for the object-storage service.
    pub storage_key: Option<String>,
    /// Passphrase unlocking the admin UI. Not a real credential system.
    pub admin_password: String,
    /// Local folder serving member images (the `public` folder).
    pub public_dir: PathBuf,
    /// Optional source folder for one-shot image sync into public_dir.
    pub member_image_source_dir: Option<PathBuf>,
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            storage_url: env::var("STORAGE_URL").ok(),
            storage_key: env::var("STORAGE_KEY").ok(),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "2025".to_string()),
            public_dir: env::var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./public")),
            member_image_source_dir: env::var("MEMBER_IMAGE_SOURCE_DIR").ok().map(PathBuf::from),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_default(),
        })
    }
}
