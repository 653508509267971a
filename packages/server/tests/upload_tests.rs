//! Image upload endpoint: validation gates and the storage write path.

mod common;

use common::TestHarness;
use test_context::test_context;

const PNG_BYTES: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

#[test_context(TestHarness)]
#[tokio::test]
async fn upload_stores_file_with_sanitized_timestamped_name(ctx: &mut TestHarness) {
    let response = ctx
        .client()
        .post_file("/api/images/upload", "김 지수 (1).png", "image/png", PNG_BYTES)
        .await;

    assert_eq!(response.status, 200);
    assert_eq!(response.get("success"), true);
    assert_eq!(response.get("original_name"), "김 지수 (1).png");

    // Object key is "{millis}_{sanitized original name}".
    let file_name = response.get("file_name").as_str().unwrap().to_string();
    assert!(file_name.ends_with("_김_지수__1_.png"), "got {}", file_name);
    let (prefix, _) = file_name.split_once('_').unwrap();
    assert!(prefix.parse::<i64>().is_ok(), "got {}", file_name);

    let path = response.get("path").as_str().unwrap().to_string();
    assert_eq!(path, format!("memory://member-images/{}", file_name));
    assert!(ctx.storage.contains(&file_name));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn oversized_upload_is_rejected_without_a_storage_write(ctx: &mut TestHarness) {
    let oversized = vec![0u8; 10 * 1024 * 1024 + 1];

    let response = ctx
        .client()
        .post_file("/api/images/upload", "big.png", "image/png", &oversized)
        .await;

    assert_eq!(response.status, 400);
    assert_eq!(response.get("error"), "File size must be less than 10MB");
    assert_eq!(ctx.storage.object_count(), 0);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn non_image_upload_is_rejected_without_a_storage_write(ctx: &mut TestHarness) {
    let response = ctx
        .client()
        .post_file("/api/images/upload", "notes.txt", "text/plain", b"hello")
        .await;

    assert_eq!(response.status, 400);
    assert_eq!(response.get("error"), "Only image files are allowed");
    assert_eq!(ctx.storage.object_count(), 0);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn multipart_without_a_file_field_is_rejected(ctx: &mut TestHarness) {
    // A multipart body with no parts at all.
    let body = b"--test-boundary-7MA4YWxkTrZu0gW--\r\n".to_vec();

    let response = ctx
        .client()
        .post_raw(
            "/api/images/upload",
            "multipart/form-data; boundary=test-boundary-7MA4YWxkTrZu0gW",
            body,
        )
        .await;

    assert_eq!(response.status, 400);
    assert_eq!(response.get("error"), "No file provided");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn upload_without_configured_storage_returns_503(ctx: &mut TestHarness) {
    let client = common::http::TestClient::new(ctx.app_without_storage());

    let response = client
        .post_file("/api/images/upload", "김지수.png", "image/png", PNG_BYTES)
        .await;

    assert_eq!(response.status, 503);
    assert_eq!(ctx.storage.object_count(), 0);
}
