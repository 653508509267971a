//! In-memory test doubles for infrastructure traits.
//!
//! Used by integration tests to build the app without the hosted storage
//! service. Kept in the library (not cfg(test)) so the tests/ directory can
//! reach it.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use super::traits::BaseObjectStorage;

/// Object storage held entirely in memory.
#[derive(Default)]
pub struct MemoryObjectStorage {
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryObjectStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects. Lets tests assert "no storage write occurred".
    pub fn object_count(&self) -> usize {
        self.objects.lock().expect("storage lock poisoned").len()
    }

    pub fn contains(&self, object_name: &str) -> bool {
        self.objects
            .lock()
            .expect("storage lock poisoned")
            .contains_key(object_name)
    }
}

#[async_trait]
impl BaseObjectStorage for MemoryObjectStorage {
    async fn upload(
        &self,
        object_name: &str,
        _content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String> {
        self.objects
            .lock()
            .expect("storage lock poisoned")
            .insert(object_name.to_string(), bytes);
        Ok(self.public_url(object_name))
    }

    async fn list(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self
            .objects
            .lock()
            .expect("storage lock poisoned")
            .keys()
            .cloned()
            .collect();
        names.sort();
        Ok(names)
    }

    fn public_url(&self, object_name: &str) -> String {
        format!("memory://member-images/{}", object_name)
    }
}
