use async_trait::async_trait;
use mediatag_core::{Media, MediaResult};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Media record repository
#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// Store a new media record under a freshly generated id.
    async fn create(&self, name: &str, mime_type: &str) -> MediaResult<Media>;

    /// Fetch the records that exist among `ids`, keyed by id.
    ///
    /// Unknown ids are left out of the map; they are not an error.
    async fn get_by_ids(&self, ids: &[String]) -> MediaResult<HashMap<String, Media>>;
}

/// In-memory media repository
///
/// Many readers may hold the lock at once; `create` takes it exclusively.
#[derive(Clone, Default)]
pub struct InMemoryMediaRepository {
    medias: Arc<RwLock<HashMap<String, Media>>>,
}

impl InMemoryMediaRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MediaRepository for InMemoryMediaRepository {
    #[tracing::instrument(skip(self), fields(db.table = "medias", db.operation = "insert"))]
    async fn create(&self, name: &str, mime_type: &str) -> MediaResult<Media> {
        let media = Media {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            mime_type: mime_type.to_string(),
        };

        self.medias
            .write()
            .await
            .insert(media.id.clone(), media.clone());

        tracing::debug!(media.id = %media.id, "Media record created");
        Ok(media)
    }

    #[tracing::instrument(skip(self, ids), fields(db.table = "medias", db.operation = "select", requested = ids.len()))]
    async fn get_by_ids(&self, ids: &[String]) -> MediaResult<HashMap<String, Media>> {
        let medias = self.medias.read().await;

        let result: HashMap<String, Media> = ids
            .iter()
            .filter_map(|id| medias.get(id).map(|media| (id.clone(), media.clone())))
            .collect();

        Ok(result)
    }
}
