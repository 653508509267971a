//! Application setup and server configuration.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::{delete, get, post, put},
    Extension, Router,
};
use sqlx::PgPool;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::kernel::{AdminGate, BaseObjectStorage, ImageLibrary, StreamHub};
use crate::server::middleware::extract_client_ip;
use crate::server::routes::{
    admin_unlock, check_env, create_goal, create_meeting, create_member, create_message,
    delete_goal, delete_meeting, delete_member, delete_message, get_contact, health_handler,
    list_goals, list_images, list_meetings, list_members, list_messages, member_columns_migration,
    put_contact, reply_message, stream_handler, sync_images, update_goal, update_meeting,
    update_member, upload_image,
};

/// Uploads are validated at 10 MB; the transport limit sits above that so the
/// handler can reject oversized files with a 400 instead of a bare 413.
const BODY_LIMIT: usize = 32 * 1024 * 1024;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    /// Object storage for uploaded member images. None when unconfigured.
    pub storage: Option<Arc<dyn BaseObjectStorage>>,
    pub images: Arc<ImageLibrary>,
    pub stream_hub: StreamHub,
    pub admin_gate: Arc<AdminGate>,
    pub member_image_source_dir: Option<PathBuf>,
    pub storage_has_url: bool,
    pub storage_has_key: bool,
}

/// Build the Axum application router.
///
/// `storage` is injected so tests can swap the hosted service for an
/// in-memory implementation.
pub fn build_app(
    pool: PgPool,
    storage: Option<Arc<dyn BaseObjectStorage>>,
    config: &Config,
) -> Router {
    let app_state = AppState {
        db_pool: pool,
        storage_has_url: config.storage_url.is_some(),
        storage_has_key: config.storage_key.is_some(),
        storage,
        images: Arc::new(ImageLibrary::new(config.public_dir.clone())),
        stream_hub: StreamHub::new(),
        admin_gate: Arc::new(AdminGate::new(config.admin_password.clone())),
        member_image_source_dir: config.member_image_source_dir.clone(),
    };

    // CORS: explicit origin list when configured, any origin in development
    let cors = if config.allowed_origins.is_empty() {
        CorsLayer::new().allow_origin(tower_http::cors::Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new().allow_origin(origins)
    }
    .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
    .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    // Rate limiting: per-IP, generous enough for normal browsing.
    // Extracts the IP from forwarding headers when behind a proxy.
    let rate_limit_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(50)
            .burst_size(100)
            .use_headers()
            .finish()
            .expect("Rate limiter configuration is valid and should never fail"),
    );
    let rate_limit_layer = GovernorLayer {
        config: rate_limit_config,
    };

    let api = Router::new()
        .route("/members", get(list_members).post(create_member))
        .route("/members/:id", put(update_member).delete(delete_member))
        .route("/meetings", get(list_meetings).post(create_meeting))
        .route("/meetings/:id", put(update_meeting).delete(delete_meeting))
        .route("/goals", get(list_goals).post(create_goal))
        .route("/goals/:id", put(update_goal).delete(delete_goal))
        .route("/messages", get(list_messages).post(create_message))
        .route("/messages/:id", delete(delete_message))
        .route("/messages/:id/reply", post(reply_message))
        .route("/contact", get(get_contact).put(put_contact))
        .route("/images", get(list_images))
        .route("/images/sync", post(sync_images))
        .route("/images/upload", post(upload_image))
        .route("/check-env", get(check_env))
        .route("/migrations/member-columns", post(member_columns_migration))
        .route("/admin/unlock", post(admin_unlock))
        .route("/streams/:topic", get(stream_handler));

    Router::new()
        .nest("/api", api)
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(rate_limit_layer)
        .layer(middleware::from_fn(extract_client_ip))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
