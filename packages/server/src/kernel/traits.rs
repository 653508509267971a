// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Naming convention: Base* for trait names.

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// Object Storage Trait (Infrastructure - managed bucket service)
// =============================================================================

#[async_trait]
pub trait BaseObjectStorage: Send + Sync {
    /// Upload an object into the bucket. `object_name` is already sanitized.
    /// Returns the object's public URL.
    async fn upload(&self, object_name: &str, content_type: &str, bytes: Vec<u8>) -> Result<String>;

    /// List object names currently in the bucket.
    async fn list(&self) -> Result<Vec<String>>;

    /// Public URL for an object, without checking existence.
    fn public_url(&self, object_name: &str) -> String;
}
