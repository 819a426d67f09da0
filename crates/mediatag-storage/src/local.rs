use crate::traits::{ContentStore, StorageResult};
use crate::{ContentBackend, FileError};
use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Local filesystem content store
///
/// Each blob is the file `{base_path}/{media_id}`. Writes go to a temporary
/// file first and are renamed into place, so readers never see a partial blob.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory for content files (e.g., "/var/lib/mediatag/content")
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            FileError::Backend(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Convert a media id to its file path.
    ///
    /// Ids are flat file names: anything that could name a directory or climb
    /// out of the base directory is rejected.
    fn key_to_path(&self, media_id: &str) -> StorageResult<PathBuf> {
        if media_id.is_empty()
            || media_id == "."
            || media_id.contains("..")
            || media_id.contains('/')
            || media_id.contains('\\')
            || media_id.contains('\0')
        {
            return Err(FileError::InvalidKey(media_id.to_string()));
        }

        Ok(self.base_path.join(media_id))
    }

    fn temp_path(&self, media_id: &str) -> PathBuf {
        self.base_path
            .join(format!(".{}.{}.tmp", media_id, Uuid::new_v4()))
    }

    async fn write_file(&self, media_id: &str, path: &Path, content: &[u8]) -> StorageResult<()> {
        let mut file = fs::File::create(path)
            .await
            .map_err(|e| FileError::from_io(media_id, e))?;

        file.write_all(content)
            .await
            .map_err(|e| FileError::from_io(media_id, e))?;

        file.sync_all()
            .await
            .map_err(|e| FileError::from_io(media_id, e))?;

        Ok(())
    }
}

#[async_trait]
impl ContentStore for LocalStorage {
    #[tracing::instrument(skip(self, content), fields(media.id = %media_id, size_bytes = content.len()))]
    async fn upload(&self, media_id: &str, content: &[u8]) -> StorageResult<()> {
        let path = self.key_to_path(media_id)?;
        let temp_path = self.temp_path(media_id);
        let start = std::time::Instant::now();

        if let Err(e) = self.write_file(media_id, &temp_path, content).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e);
        }

        if let Err(e) = fs::rename(&temp_path, &path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(FileError::from_io(media_id, e));
        }

        tracing::info!(
            path = %path.display(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage upload successful"
        );

        Ok(())
    }

    #[tracing::instrument(skip(self), fields(media.id = %media_id))]
    async fn get_content(&self, media_id: &str) -> StorageResult<Bytes> {
        let path = self.key_to_path(media_id)?;
        let start = std::time::Instant::now();

        let data = fs::read(&path)
            .await
            .map_err(|e| FileError::from_io(media_id, e))?;

        tracing::debug!(
            path = %path.display(),
            size_bytes = data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage read successful"
        );

        Ok(Bytes::from(data))
    }

    async fn exists(&self, media_id: &str) -> StorageResult<bool> {
        let path = self.key_to_path(media_id)?;
        fs::try_exists(&path)
            .await
            .map_err(|e| FileError::from_io(media_id, e))
    }

    fn backend_type(&self) -> ContentBackend {
        ContentBackend::Local
    }
}
