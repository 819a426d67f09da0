mod helpers;

use helpers::fixtures::text_media;
use helpers::setup_test_catalog;
use mediatag_services::{
    InMemoryTagRepository, MediaError, MediaService, MemoryStorage, Tag, TagRepository,
};
use mediatag_db::test_helpers::{FailingMediaRepository, FailingTagRepository};
use std::collections::HashSet;
use std::sync::Arc;

#[tokio::test]
async fn test_search_returns_only_media_with_tag() {
    let catalog = setup_test_catalog();

    let a = catalog.media.create(text_media("a", &["x"])).await.unwrap();
    let b = catalog.media.create(text_media("b", &["x", "z"])).await.unwrap();
    let c = catalog.media.create(text_media("c", &["y"])).await.unwrap();

    let result = catalog.media.search_by_tag("x").await.unwrap();
    let ids: HashSet<&str> = result.medias.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, HashSet::from([a.media.id.as_str(), b.media.id.as_str()]));

    assert_eq!(result.tags.len(), 2, "Tag map should cover exactly A and B");
    assert_eq!(result.tags_for(&a.media.id), &[Tag::new("x")]);
    assert_eq!(result.tags_for(&b.media.id), &[Tag::new("x"), Tag::new("z")]);
    assert!(!result.tags.contains_key(&c.media.id));

    let result = catalog.media.search_by_tag("y").await.unwrap();
    assert_eq!(result.medias.len(), 1);
    assert_eq!(result.medias[0], c.media);
}

#[tokio::test]
async fn test_search_unknown_tag_is_empty() {
    let catalog = setup_test_catalog();
    catalog.media.create(text_media("a", &["x"])).await.unwrap();

    let result = catalog.media.search_by_tag("nonexistent").await.unwrap();
    assert!(result.medias.is_empty());
    assert!(result.tags.is_empty());
}

#[tokio::test]
async fn test_search_registered_tag_without_media_is_empty() {
    let catalog = setup_test_catalog();
    catalog.tags.create("empty").await.unwrap();

    let result = catalog.media.search_by_tag("empty").await.unwrap();
    assert!(result.medias.is_empty());
}

#[tokio::test]
async fn test_search_skips_ids_without_media_record() {
    let catalog = setup_test_catalog();
    let a = catalog.media.create(text_media("a", &["x"])).await.unwrap();

    // Link a dangling id directly in the tag index
    catalog.tag_repository.link("x", "ghost").await.unwrap();

    let result = catalog.media.search_by_tag("x").await.unwrap();
    assert_eq!(result.medias, vec![a.media.clone()]);
    // The tag map is keyed by every resolved id
    assert_eq!(result.tags.len(), 2);
    assert_eq!(result.tags_for("ghost"), &[Tag::new("x")]);
}

#[tokio::test]
async fn test_search_propagates_tag_lookup_failure() {
    let tag_repository = FailingTagRepository::new().failing_tags_for_medias();
    tag_repository.inner().link("x", "media-1").await.unwrap();

    let service = MediaService::new(
        Arc::new(FailingMediaRepository::new()),
        Arc::new(tag_repository),
        Arc::new(MemoryStorage::new()),
    );

    let result = service.search_by_tag("x").await;
    assert!(
        matches!(result, Err(MediaError::Repository(_)) | Err(MediaError::Cancelled)),
        "Search should fail when a branch fails, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_search_propagates_media_lookup_failure() {
    let tag_repository = InMemoryTagRepository::new();
    tag_repository.link("x", "media-1").await.unwrap();

    let service = MediaService::new(
        Arc::new(FailingMediaRepository::new().failing_get_by_ids()),
        Arc::new(tag_repository),
        Arc::new(MemoryStorage::new()),
    );

    let result = service.search_by_tag("x").await;
    assert!(result.is_err(), "Search should fail when media lookup fails");
}
