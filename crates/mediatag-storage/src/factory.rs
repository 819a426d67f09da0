#[cfg(feature = "storage-local")]
use crate::LocalStorage;
#[cfg(feature = "storage-memory")]
use crate::MemoryStorage;
use crate::{ContentBackend, ContentStore, FileError, StorageResult};
use mediatag_core::CatalogConfig;
use std::sync::Arc;

/// Create a content store based on configuration
pub async fn create_content_store(config: &CatalogConfig) -> StorageResult<Arc<dyn ContentStore>> {
    match config.content_backend {
        #[cfg(feature = "storage-memory")]
        ContentBackend::Memory => Ok(Arc::new(MemoryStorage::new())),

        #[cfg(not(feature = "storage-memory"))]
        ContentBackend::Memory => Err(FileError::Backend(
            "Memory content backend not available (storage-memory feature not enabled)"
                .to_string(),
        )),

        #[cfg(feature = "storage-local")]
        ContentBackend::Local => {
            let base_path = config.local_storage_path.clone().ok_or_else(|| {
                FileError::Backend("LOCAL_STORAGE_PATH not configured".to_string())
            })?;

            let storage = LocalStorage::new(base_path).await?;
            Ok(Arc::new(storage))
        }

        #[cfg(not(feature = "storage-local"))]
        ContentBackend::Local => Err(FileError::Backend(
            "Local content backend not available (storage-local feature not enabled)".to_string(),
        )),
    }
}
