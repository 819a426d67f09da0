use crate::traits::{ContentStore, StorageResult};
use crate::{ContentBackend, FileError};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory content store
///
/// Content is copied on upload, so later changes to the caller's buffer are
/// never observed. Cloning shares the underlying map.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    files: Arc<RwLock<HashMap<String, Bytes>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs
    pub async fn len(&self) -> usize {
        self.files.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.files.read().await.is_empty()
    }
}

#[async_trait]
impl ContentStore for MemoryStorage {
    #[tracing::instrument(skip(self, content), fields(media.id = %media_id, size_bytes = content.len()))]
    async fn upload(&self, media_id: &str, content: &[u8]) -> StorageResult<()> {
        let copy = Bytes::copy_from_slice(content);

        self.files.write().await.insert(media_id.to_string(), copy);

        tracing::debug!("Memory storage upload successful");
        Ok(())
    }

    async fn get_content(&self, media_id: &str) -> StorageResult<Bytes> {
        self.files
            .read()
            .await
            .get(media_id)
            .cloned()
            .ok_or_else(|| FileError::NotFound(media_id.to_string()))
    }

    async fn exists(&self, media_id: &str) -> StorageResult<bool> {
        Ok(self.files.read().await.contains_key(media_id))
    }

    fn backend_type(&self) -> ContentBackend {
        ContentBackend::Memory
    }
}
