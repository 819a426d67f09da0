//! Content store doubles for testing failure paths

use crate::traits::{ContentStore, StorageResult};
use crate::{ContentBackend, FileError};
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Content store whose uploads always fail; reads report nothing stored.
#[derive(Debug, Default)]
pub struct FailingContentStore {
    upload_attempts: AtomicUsize,
}

impl FailingContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upload_attempts(&self) -> usize {
        self.upload_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentStore for FailingContentStore {
    async fn upload(&self, media_id: &str, _content: &[u8]) -> StorageResult<()> {
        self.upload_attempts.fetch_add(1, Ordering::SeqCst);
        Err(FileError::Backend(format!(
            "upload rejected for media {}",
            media_id
        )))
    }

    async fn get_content(&self, media_id: &str) -> StorageResult<Bytes> {
        Err(FileError::NotFound(media_id.to_string()))
    }

    async fn exists(&self, _media_id: &str) -> StorageResult<bool> {
        Ok(false)
    }

    fn backend_type(&self) -> ContentBackend {
        ContentBackend::Memory
    }
}
