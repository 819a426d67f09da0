//! Catalog wiring from configuration

use mediatag_core::{CatalogConfig, MediaResult};
use mediatag_db::{InMemoryMediaRepository, InMemoryTagRepository, MediaRepository, TagRepository};
use mediatag_storage::{create_content_store, ContentStore};
use std::sync::Arc;

use crate::services::media::MediaService;
use crate::services::tag::TagService;

/// Both services, sharing one tag repository.
#[derive(Clone)]
pub struct Catalog {
    pub media: MediaService,
    pub tags: TagService,
}

impl Catalog {
    /// Build a catalog on in-memory repositories and the configured content store.
    pub async fn from_config(config: &CatalogConfig) -> MediaResult<Self> {
        tracing::info!("Initializing content store...");
        let content_store = create_content_store(config).await?;
        tracing::info!(
            backend = %content_store.backend_type(),
            "Content store initialized"
        );

        Ok(Self::new(
            config,
            Arc::new(InMemoryMediaRepository::new()),
            Arc::new(InMemoryTagRepository::new()),
            content_store,
        ))
    }

    /// Build a catalog on caller-provided stores.
    pub fn new(
        config: &CatalogConfig,
        media_repository: Arc<dyn MediaRepository>,
        tag_repository: Arc<dyn TagRepository>,
        content_store: Arc<dyn ContentStore>,
    ) -> Self {
        let media = MediaService::new(media_repository, tag_repository.clone(), content_store)
            .with_tagging_policy(config.tagging_policy)
            .with_operation_timeout(config.operation_timeout);
        let tags = TagService::new(tag_repository).with_operation_timeout(config.operation_timeout);

        Self { media, tags }
    }
}
