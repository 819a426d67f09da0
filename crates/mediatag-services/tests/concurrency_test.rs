mod helpers;

use futures::future::join_all;
use helpers::fixtures::text_media;
use helpers::setup_test_catalog;
use mediatag_services::{MediaRepository, TagRepository};
use std::collections::HashSet;
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_are_distinct_and_retrievable() {
    let catalog = Arc::new(setup_test_catalog());
    let count = 100;

    let handles = (0..count).map(|i| {
        let catalog = catalog.clone();
        tokio::spawn(async move {
            catalog
                .media
                .create(text_media(&format!("media-{}", i), &["shared"]))
                .await
                .unwrap()
        })
    });

    let ids: Vec<String> = join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.unwrap().media.id)
        .collect();

    let distinct: HashSet<&String> = ids.iter().collect();
    assert_eq!(distinct.len(), count, "Every create should get its own id");

    let found = catalog.media_repository.get_by_ids(&ids).await.unwrap();
    assert_eq!(found.len(), count);

    let tagged = catalog
        .tag_repository
        .get_media_ids_for_tag("shared")
        .await
        .unwrap();
    assert_eq!(tagged.len(), count);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_search_during_concurrent_creates() {
    let catalog = Arc::new(setup_test_catalog());

    let writers = (0..20).map(|i| {
        let catalog = catalog.clone();
        tokio::spawn(async move {
            catalog
                .media
                .create(text_media(&format!("media-{}", i), &["x", "y"]))
                .await
                .unwrap();
        })
    });
    let readers = (0..20).map(|_| {
        let catalog = catalog.clone();
        tokio::spawn(async move {
            let result = catalog.media.search_by_tag("x").await.unwrap();
            // Every returned media was fully linked before its id became visible
            for media in &result.medias {
                assert!(!result.tags_for(&media.id).is_empty());
            }
        })
    });

    for joined in join_all(writers.chain(readers)).await {
        joined.unwrap();
    }

    let result = catalog.media.search_by_tag("x").await.unwrap();
    assert_eq!(result.medias.len(), 20);
    assert_eq!(result.tags.len(), 20);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicate_links_stay_single() {
    let catalog = Arc::new(setup_test_catalog());
    let created = catalog.media.create(text_media("m", &[])).await.unwrap();

    let handles = (0..32).map(|_| {
        let catalog = catalog.clone();
        let media_id = created.media.id.clone();
        tokio::spawn(async move { catalog.tag_repository.link("t", &media_id).await.unwrap() })
    });
    for joined in join_all(handles).await {
        joined.unwrap();
    }

    let ids = catalog.tag_repository.get_media_ids_for_tag("t").await.unwrap();
    assert_eq!(ids, vec![created.media.id.clone()]);
}
