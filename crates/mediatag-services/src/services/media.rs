//! Media orchestration: creation with tag linking and upload, tag search and
//! content retrieval.

use bytes::Bytes;
use mediatag_core::{
    ErrorMetadata, LogLevel, Media, MediaError, MediaResult, NewMedia, Tag, TaggingPolicy,
};
use mediatag_db::{MediaRepository, TagRepository};
use mediatag_storage::ContentStore;
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::with_deadline;

/// A media record together with the tags that were linked to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedMedia {
    pub media: Media,
    /// Successfully linked tags, in request order.
    pub tags: Vec<Tag>,
}

/// Failure of [`MediaService::create`].
///
/// Only `Metadata` means nothing was stored. The other variants carry the
/// media record and tags that remain committed; there is no rollback.
#[derive(Debug, thiserror::Error)]
pub enum CreateMediaError {
    #[error("media creation failed")]
    Metadata(#[from] MediaError),

    #[error("media {} created but tag linking failed", .created.media.id)]
    Tagging {
        created: CreatedMedia,
        #[source]
        source: MediaError,
    },

    #[error("media {} created but content upload failed", .created.media.id)]
    ContentUpload {
        created: CreatedMedia,
        #[source]
        source: MediaError,
    },
}

impl CreateMediaError {
    /// What stayed committed despite the failure, if anything.
    pub fn committed(&self) -> Option<&CreatedMedia> {
        match self {
            CreateMediaError::Metadata(_) => None,
            CreateMediaError::Tagging { created, .. }
            | CreateMediaError::ContentUpload { created, .. } => Some(created),
        }
    }

    pub fn into_committed(self) -> Option<CreatedMedia> {
        match self {
            CreateMediaError::Metadata(_) => None,
            CreateMediaError::Tagging { created, .. }
            | CreateMediaError::ContentUpload { created, .. } => Some(created),
        }
    }

    /// The underlying store error.
    pub fn media_error(&self) -> &MediaError {
        match self {
            CreateMediaError::Metadata(source)
            | CreateMediaError::Tagging { source, .. }
            | CreateMediaError::ContentUpload { source, .. } => source,
        }
    }
}

impl ErrorMetadata for CreateMediaError {
    fn http_status_code(&self) -> u16 {
        self.media_error().http_status_code()
    }

    fn error_code(&self) -> &'static str {
        self.media_error().error_code()
    }

    fn client_message(&self) -> String {
        "media creation failed".to_string()
    }

    fn log_level(&self) -> LogLevel {
        self.media_error().log_level()
    }
}

/// Result of [`MediaService::search_by_tag`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// The media that exist among the tag's media ids, in no particular order.
    pub medias: Vec<Media>,
    /// Full tag set of every media id the tag resolved to.
    pub tags: HashMap<String, Vec<Tag>>,
}

impl SearchResult {
    pub fn tags_for(&self, media_id: &str) -> &[Tag] {
        self.tags.get(media_id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Content of a media with the MIME type recorded at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaContent {
    pub content: Bytes,
    pub mime_type: String,
}

/// Orchestrates the media repository, the tag repository and the content store.
///
/// The service never holds more than one store's lock at a time: every step
/// is a separate store call.
#[derive(Clone)]
pub struct MediaService {
    media_repository: Arc<dyn MediaRepository>,
    tag_repository: Arc<dyn TagRepository>,
    content_store: Arc<dyn ContentStore>,
    tagging_policy: TaggingPolicy,
    operation_timeout: Option<Duration>,
}

impl MediaService {
    /// Best-effort tagging and no deadline.
    pub fn new(
        media_repository: Arc<dyn MediaRepository>,
        tag_repository: Arc<dyn TagRepository>,
        content_store: Arc<dyn ContentStore>,
    ) -> Self {
        Self {
            media_repository,
            tag_repository,
            content_store,
            tagging_policy: TaggingPolicy::BestEffort,
            operation_timeout: None,
        }
    }

    pub fn with_tagging_policy(mut self, policy: TaggingPolicy) -> Self {
        self.tagging_policy = policy;
        self
    }

    /// Deadline applied to every entry point; `None` waits indefinitely.
    pub fn with_operation_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.operation_timeout = timeout;
        self
    }

    pub fn tagging_policy(&self) -> TaggingPolicy {
        self.tagging_policy
    }

    /// Create a media record, link its tags, then upload its content.
    ///
    /// Under [`TaggingPolicy::BestEffort`] a tag that fails to link is left out
    /// of the returned tags and creation carries on. An upload failure is
    /// reported as [`CreateMediaError::ContentUpload`]; the record and its tags
    /// stay committed. A repeated tag name is linked once.
    ///
    /// A deadline expiry is reported as `Metadata(MediaError::Timeout)` and
    /// says nothing about what was committed before it.
    #[tracing::instrument(
        skip(self, new_media),
        fields(media.name = %new_media.name, tag_count = new_media.tags.len(), size_bytes = new_media.content.len())
    )]
    pub async fn create(&self, new_media: NewMedia) -> Result<CreatedMedia, CreateMediaError> {
        with_deadline(self.operation_timeout, self.create_media(new_media)).await
    }

    async fn create_media(&self, new_media: NewMedia) -> Result<CreatedMedia, CreateMediaError> {
        let media = self
            .media_repository
            .create(&new_media.name, &new_media.mime_type)
            .await?;

        let mut seen = HashSet::new();
        let mut tags = Vec::with_capacity(new_media.tags.len());

        for tag_name in &new_media.tags {
            if !seen.insert(tag_name.as_str()) {
                continue;
            }

            match self.tag_repository.link(tag_name, &media.id).await {
                Ok(()) => tags.push(Tag::new(tag_name.as_str())),
                Err(e) => match self.tagging_policy {
                    TaggingPolicy::BestEffort => {
                        tracing::warn!(
                            media.id = %media.id,
                            tag.name = %tag_name,
                            error = %e,
                            "Tag link failed, tag left out"
                        );
                    }
                    TaggingPolicy::Strict => {
                        tracing::error!(
                            media.id = %media.id,
                            tag.name = %tag_name,
                            error = %e,
                            "Tag link failed, creation stopped before upload"
                        );
                        return Err(CreateMediaError::Tagging {
                            created: CreatedMedia { media, tags },
                            source: e,
                        });
                    }
                },
            }
        }

        if let Err(e) = self.content_store.upload(&media.id, &new_media.content).await {
            tracing::error!(
                media.id = %media.id,
                error = %e,
                "Content upload failed, media record kept"
            );
            return Err(CreateMediaError::ContentUpload {
                created: CreatedMedia { media, tags },
                source: MediaError::File(e),
            });
        }

        tracing::info!(media.id = %media.id, linked_tags = tags.len(), "Media created");

        Ok(CreatedMedia { media, tags })
    }

    /// Media linked to `tag_name` with the full tag set of each.
    ///
    /// The media records and their tags are fetched by two concurrent tasks.
    /// When one fails the other is told to stop and the first error is
    /// returned. An unknown tag yields an empty result.
    #[tracing::instrument(skip(self), fields(tag.name = %tag_name))]
    pub async fn search_by_tag(&self, tag_name: &str) -> MediaResult<SearchResult> {
        with_deadline(self.operation_timeout, self.search(tag_name)).await
    }

    async fn search(&self, tag_name: &str) -> MediaResult<SearchResult> {
        let media_ids = self.tag_repository.get_media_ids_for_tag(tag_name).await?;
        if media_ids.is_empty() {
            return Ok(SearchResult::default());
        }

        let media_ids: Arc<[String]> = media_ids.into();
        let cancel = CancellationToken::new();
        // Stops the branches that have not started yet if this future is dropped.
        let _guard = cancel.clone().drop_guard();

        let medias_task = spawn_branch(&cancel, {
            let repository = self.media_repository.clone();
            let ids = media_ids.clone();
            async move { repository.get_by_ids(&ids).await }
        });

        let tags_task = spawn_branch(&cancel, {
            let repository = self.tag_repository.clone();
            let ids = media_ids.clone();
            async move { repository.get_tags_for_medias(&ids).await }
        });

        let (medias, tags) = tokio::try_join!(
            join_branch(medias_task, &cancel),
            join_branch(tags_task, &cancel),
        )?;

        tracing::debug!(
            resolved = media_ids.len(),
            found = medias.len(),
            "Search completed"
        );

        Ok(SearchResult {
            medias: medias.into_values().collect(),
            tags,
        })
    }

    /// Content and MIME type of a media.
    ///
    /// Fails with [`MediaError::MediaNotFound`] when no record exists and with
    /// the content store's [`mediatag_core::FileError::NotFound`] (wrapped in
    /// [`MediaError::File`]) when the record has no stored content.
    #[tracing::instrument(skip(self), fields(media.id = %media_id))]
    pub async fn view(&self, media_id: &str) -> MediaResult<MediaContent> {
        with_deadline(self.operation_timeout, self.fetch_content(media_id)).await
    }

    async fn fetch_content(&self, media_id: &str) -> MediaResult<MediaContent> {
        let mut medias = self
            .media_repository
            .get_by_ids(&[media_id.to_string()])
            .await?;

        let media = medias
            .remove(media_id)
            .ok_or_else(|| MediaError::MediaNotFound(media_id.to_string()))?;

        let content = self.content_store.get_content(&media.id).await?;

        Ok(MediaContent {
            content,
            mime_type: media.mime_type,
        })
    }
}

/// Spawn one fan-out branch. A branch whose token is already cancelled does
/// not start its store call; a call in progress runs to completion.
fn spawn_branch<T, F>(cancel: &CancellationToken, fut: F) -> JoinHandle<MediaResult<T>>
where
    F: Future<Output = MediaResult<T>> + Send + 'static,
    T: Send + 'static,
{
    let cancel = cancel.clone();
    tokio::spawn(async move {
        if cancel.is_cancelled() {
            return Err(MediaError::Cancelled);
        }
        fut.await
    })
}

/// Await a branch, cancelling the shared token when it fails.
async fn join_branch<T>(
    handle: JoinHandle<MediaResult<T>>,
    cancel: &CancellationToken,
) -> MediaResult<T> {
    let result = match handle.await {
        Ok(result) => result,
        Err(e) => Err(MediaError::Repository(format!("search task failed: {}", e))),
    };

    if result.is_err() {
        cancel.cancel();
    }

    result
}
