use async_trait::async_trait;
use mediatag_core::{MediaResult, Tag};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Tag index repository: a many-to-many index between tag names and media ids.
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Every known tag, keyed by name.
    async fn get_all(&self) -> MediaResult<HashMap<String, Tag>>;

    /// Ids of the media linked to `name`, in link order. Empty for unknown tags.
    async fn get_media_ids_for_tag(&self, name: &str) -> MediaResult<Vec<String>>;

    /// Tags of each requested media. Every requested id gets an entry, empty
    /// when the media has no tags.
    async fn get_tags_for_medias(
        &self,
        media_ids: &[String],
    ) -> MediaResult<HashMap<String, Vec<Tag>>>;

    /// Register a tag. Registering an existing tag leaves its links untouched.
    async fn create(&self, name: &str) -> MediaResult<Tag>;

    /// Link a tag and a media, registering the tag if needed. Linking an
    /// already linked pair is a no-op.
    async fn link(&self, tag_name: &str, media_id: &str) -> MediaResult<()>;
}

/// Both directions of the index; always updated together.
#[derive(Debug, Default)]
struct TagIndex {
    tags: HashMap<String, Vec<String>>,
    medias: HashMap<String, Vec<String>>,
}

/// In-memory tag repository
///
/// A single lock guards both directions so a reader never sees a link
/// recorded on one side only.
#[derive(Clone, Default)]
pub struct InMemoryTagRepository {
    index: Arc<RwLock<TagIndex>>,
}

impl InMemoryTagRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn get_all(&self) -> MediaResult<HashMap<String, Tag>> {
        let index = self.index.read().await;

        Ok(index
            .tags
            .keys()
            .map(|name| (name.clone(), Tag::new(name.as_str())))
            .collect())
    }

    #[tracing::instrument(skip(self), fields(db.table = "tags", db.operation = "select"))]
    async fn get_media_ids_for_tag(&self, name: &str) -> MediaResult<Vec<String>> {
        let index = self.index.read().await;

        Ok(index.tags.get(name).cloned().unwrap_or_default())
    }

    #[tracing::instrument(skip(self, media_ids), fields(db.table = "tags", db.operation = "select", requested = media_ids.len()))]
    async fn get_tags_for_medias(
        &self,
        media_ids: &[String],
    ) -> MediaResult<HashMap<String, Vec<Tag>>> {
        let index = self.index.read().await;

        Ok(media_ids
            .iter()
            .map(|media_id| {
                let tags = index
                    .medias
                    .get(media_id)
                    .map(|names| names.iter().map(|name| Tag::new(name.as_str())).collect())
                    .unwrap_or_default();
                (media_id.clone(), tags)
            })
            .collect())
    }

    #[tracing::instrument(skip(self), fields(db.table = "tags", db.operation = "insert"))]
    async fn create(&self, name: &str) -> MediaResult<Tag> {
        let mut index = self.index.write().await;

        index.tags.entry(name.to_string()).or_default();

        Ok(Tag::new(name))
    }

    #[tracing::instrument(skip(self), fields(db.table = "tags", db.operation = "link"))]
    async fn link(&self, tag_name: &str, media_id: &str) -> MediaResult<()> {
        let mut index = self.index.write().await;

        let media_tags = index.medias.entry(media_id.to_string()).or_default();
        if media_tags.iter().any(|tag| tag == tag_name) {
            return Ok(());
        }
        media_tags.push(tag_name.to_string());

        index
            .tags
            .entry(tag_name.to_string())
            .or_default()
            .push(media_id.to_string());

        tracing::debug!("Tag linked");
        Ok(())
    }
}
