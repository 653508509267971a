//! Admin endpoints: the passphrase gate, environment check, and the one-off
//! member-columns schema migration.

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::data_migrations::ensure_member_columns;
use crate::kernel::UnlockOutcome;
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::middleware::ClientIp;

#[derive(Deserialize)]
pub struct UnlockInput {
    pub password: String,
}

/// POST /api/admin/unlock
///
/// Three failures from one client block further attempts for 30 seconds,
/// correct password or not.
pub async fn admin_unlock(
    Extension(state): Extension<AppState>,
    Extension(client_ip): Extension<ClientIp>,
    Json(input): Json<UnlockInput>,
) -> impl IntoResponse {
    match state.admin_gate.attempt(&client_ip.key(), &input.password) {
        UnlockOutcome::Unlocked => (StatusCode::OK, Json(json!({ "authorized": true }))),
        UnlockOutcome::Rejected {
            attempts,
            max_attempts,
        } => (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid password",
                "attempts": attempts,
                "max_attempts": max_attempts,
            })),
        ),
        UnlockOutcome::Blocked { retry_after_secs } => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({
                "error": "Too many failed attempts",
                "retry_after_secs": retry_after_secs,
            })),
        ),
    }
}

/// GET /api/check-env - reports whether the storage service is configured.
pub async fn check_env(Extension(state): Extension<AppState>) -> Json<serde_json::Value> {
    let configured = state.storage_has_url && state.storage_has_key;
    Json(json!({
        "configured": configured,
        "has_url": state.storage_has_url,
        "has_key": state.storage_has_key,
        "message": if configured {
            "Storage is configured"
        } else {
            "Storage environment variables are missing"
        },
    }))
}

/// POST /api/migrations/member-columns - idempotent one-off schema upgrade.
pub async fn member_columns_migration(
    Extension(state): Extension<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let report = ensure_member_columns(&state.db_pool).await?;
    Ok(Json(json!({
        "success": true,
        "image_added": report.image_added,
        "display_order_added": report.display_order_added,
    })))
}
