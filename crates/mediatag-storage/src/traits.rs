//! Content store abstraction trait

use crate::{ContentBackend, FileError};
use async_trait::async_trait;
use bytes::Bytes;

/// Result type for content store operations
pub type StorageResult<T> = Result<T, FileError>;

/// Content store abstraction trait
///
/// Every backend must be safe to call concurrently from any number of tasks,
/// and must answer a read for an id with no stored blob with
/// [`FileError::NotFound`].
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Store the content for a media, replacing any previous content.
    async fn upload(&self, media_id: &str, content: &[u8]) -> StorageResult<()>;

    /// Fetch the content stored for a media.
    async fn get_content(&self, media_id: &str) -> StorageResult<Bytes>;

    /// Check if content exists for a media
    async fn exists(&self, media_id: &str) -> StorageResult<bool>;

    /// Get the storage backend type
    fn backend_type(&self) -> ContentBackend;
}
