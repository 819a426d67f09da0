#![allow(dead_code)]

pub mod fixtures;

use mediatag_services::{
    CatalogConfig, ContentStore, InMemoryMediaRepository, InMemoryTagRepository, MediaService,
    MemoryStorage, TagService,
};
use std::sync::Arc;

/// Services over fresh in-memory stores, with handles on the stores for assertions.
pub struct TestCatalog {
    pub media: MediaService,
    pub tags: TagService,
    pub media_repository: InMemoryMediaRepository,
    pub tag_repository: InMemoryTagRepository,
    pub content_store: Arc<MemoryStorage>,
}

/// Setup a catalog with isolated in-memory stores
pub fn setup_test_catalog() -> TestCatalog {
    setup_test_catalog_with(&CatalogConfig::in_memory())
}

pub fn setup_test_catalog_with(config: &CatalogConfig) -> TestCatalog {
    let media_repository = InMemoryMediaRepository::new();
    let tag_repository = InMemoryTagRepository::new();
    let content_store = Arc::new(MemoryStorage::new());

    let store: Arc<dyn ContentStore> = content_store.clone();
    let media = MediaService::new(
        Arc::new(media_repository.clone()),
        Arc::new(tag_repository.clone()),
        store,
    )
    .with_tagging_policy(config.tagging_policy)
    .with_operation_timeout(config.operation_timeout);
    let tags = TagService::new(Arc::new(tag_repository.clone()))
        .with_operation_timeout(config.operation_timeout);

    TestCatalog {
        media,
        tags,
        media_repository,
        tag_repository,
        content_store,
    }
}
