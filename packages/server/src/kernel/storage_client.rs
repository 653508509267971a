//! Client for the hosted object-storage service.
//!
//! Speaks the service's REST surface for a single fixed bucket:
//! - `POST {base}/storage/v1/object/{bucket}/{name}` - authenticated upload
//! - `POST {base}/storage/v1/object/list/{bucket}` - object listing
//! - `GET  {base}/storage/v1/object/public/{bucket}/{name}` - public access
//!
//! Failures map to anyhow errors with enough context for route handlers to
//! log and surface a 500.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use super::traits::BaseObjectStorage;

/// Bucket holding member gallery images.
pub const MEMBER_IMAGES_BUCKET: &str = "member-images";

pub struct HostedStorageClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    bucket: String,
}

#[derive(Deserialize)]
struct ListedObject {
    name: String,
}

impl HostedStorageClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            bucket: MEMBER_IMAGES_BUCKET.to_string(),
        }
    }

    fn object_path(&self, object_name: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url,
            self.bucket,
            urlencoding::encode(object_name)
        )
    }
}

#[async_trait]
impl BaseObjectStorage for HostedStorageClient {
    async fn upload(
        &self,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String> {
        let response = self
            .client
            .post(self.object_path(object_name))
            .bearer_auth(&self.api_key)
            .header("x-upsert", "false")
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .context("Storage upload request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("Storage upload rejected ({}): {}", status, body);
        }

        Ok(self.public_url(object_name))
    }

    async fn list(&self) -> Result<Vec<String>> {
        let url = format!("{}/storage/v1/object/list/{}", self.base_url, self.bucket);
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({ "prefix": "" }))
            .send()
            .await
            .context("Storage list request failed")?
            .error_for_status()
            .context("Storage list rejected")?;

        let objects: Vec<ListedObject> = response
            .json()
            .await
            .context("Storage list returned malformed JSON")?;

        Ok(objects.into_iter().map(|o| o.name).collect())
    }

    fn public_url(&self, object_name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url,
            self.bucket,
            urlencoding::encode(object_name)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_url_encodes_object_name() {
        let client =
            HostedStorageClient::new("https://store.example.com/".to_string(), "key".to_string());

        assert_eq!(
            client.public_url("1700000000000_김지수.png"),
            format!(
                "https://store.example.com/storage/v1/object/public/member-images/{}",
                urlencoding::encode("1700000000000_김지수.png")
            )
        );
    }
}
