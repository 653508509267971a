//! Image endpoints: public-folder listing, source-folder sync, and uploads
//! into the storage bucket.

use axum::extract::{Extension, Multipart};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde_json::json;

use crate::server::app::AppState;
use crate::server::error::ApiError;

/// Maximum accepted upload size.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// GET /api/images - list image files in the public folder.
///
/// Degrades to an empty list on filesystem errors so the gallery can still
/// render without portraits.
pub async fn list_images(Extension(state): Extension<AppState>) -> impl IntoResponse {
    match state.images.list() {
        Ok(images) => (StatusCode::OK, Json(json!({ "images": images }))),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list public images");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "images": [], "error": "Failed to read images" })),
            )
        }
    }
}

/// POST /api/images/sync - copy member images from the configured source
/// directory into the public folder, skipping files that already exist.
pub async fn sync_images(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let Some(source_dir) = state.member_image_source_dir.clone() else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "message": "Source directory not found" })),
        );
    };
    if !source_dir.is_dir() {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "message": "Source directory not found" })),
        );
    }

    match state.images.sync_from(&source_dir) {
        Ok(report) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Image sync complete",
                "total_images": report.total_images,
                "copied_files": report.copied_files,
                "skipped_files": report.skipped_files,
            })),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Image sync failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "message": "Failed to sync images" })),
            )
        }
    }
}

/// Replace anything outside Hangul syllables, ASCII alphanumerics, `.` and
/// `-` with underscores, keeping names safe for object keys and URLs.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || ('가'..='힣').contains(&c) {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// POST /api/images/upload - multipart upload into the member-images bucket.
///
/// Validation happens before any storage call: a rejected upload performs no
/// storage write.
pub async fn upload_image(
    Extension(state): Extension<AppState>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    let storage = state
        .storage
        .as_ref()
        .ok_or(ApiError::StorageUnconfigured)?;

    let mut file: Option<(String, String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let original_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .map(|ct| ct.to_string())
            .unwrap_or_default();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;
        file = Some((original_name, content_type, bytes.to_vec()));
        break;
    }

    let Some((original_name, content_type, bytes)) = file else {
        return Err(ApiError::BadRequest("No file provided".to_string()));
    };

    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ApiError::BadRequest(
            "File size must be less than 10MB".to_string(),
        ));
    }
    if !content_type.starts_with("image/") {
        return Err(ApiError::BadRequest(
            "Only image files are allowed".to_string(),
        ));
    }

    // Timestamp prefix keeps repeated uploads of the same file distinct.
    let object_name = format!(
        "{}_{}",
        Utc::now().timestamp_millis(),
        sanitize_file_name(&original_name)
    );

    let public_url = storage
        .upload(&object_name, &content_type, bytes)
        .await
        .map_err(|e| ApiError::Internal(e.context("Upload failed")))?;

    Ok(Json(json!({
        "success": true,
        "path": public_url,
        "file_name": object_name,
        "original_name": original_name,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_hangul_and_ascii() {
        assert_eq!(sanitize_file_name("김지수.png"), "김지수.png");
        assert_eq!(sanitize_file_name("profile-2.jpg"), "profile-2.jpg");
    }

    #[test]
    fn sanitize_replaces_everything_else() {
        assert_eq!(sanitize_file_name("my photo (1).png"), "my_photo__1_.png");
        assert_eq!(sanitize_file_name("a/b\\c.png"), "a_b_c.png");
        assert_eq!(sanitize_file_name("résumé.png"), "r_sum_.png");
    }
}
