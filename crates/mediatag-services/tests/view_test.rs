mod helpers;

use helpers::fixtures::text_media;
use helpers::setup_test_catalog;
use mediatag_services::{
    Catalog, CatalogConfig, ContentStore, ErrorMetadata, MediaError, MediaRepository, NewMedia,
};

#[tokio::test]
async fn test_view_unknown_media_is_media_not_found() {
    let catalog = setup_test_catalog();

    let err = catalog.media.view("unknown").await.unwrap_err();
    assert!(err.is_media_not_found());
    assert!(!err.is_file_not_found());
    assert_eq!(err.http_status_code(), 404);
}

#[tokio::test]
async fn test_view_media_without_content_is_file_not_found() {
    let catalog = setup_test_catalog();

    // Metadata only, no upload
    let media = catalog
        .media_repository
        .create("orphan", "text/plain")
        .await
        .unwrap();

    let err = catalog.media.view(&media.id).await.unwrap_err();
    assert!(err.is_file_not_found());
    assert!(!err.is_media_not_found());
    assert!(matches!(err, MediaError::File(_)));
    assert_eq!(err.http_status_code(), 404);
}

#[tokio::test]
async fn test_view_returns_uploaded_bytes_and_mime_type() {
    let catalog = setup_test_catalog();

    let created = catalog
        .media
        .create(NewMedia::new("photo", vec![], vec![0, 1, 2, 255], "image/png"))
        .await
        .unwrap();

    let content = catalog.media.view(&created.media.id).await.unwrap();
    assert_eq!(content.content.as_ref(), &[0, 1, 2, 255]);
    assert_eq!(content.mime_type, "image/png");
}

#[tokio::test]
async fn test_view_with_local_content_store() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::from_config(&CatalogConfig::local(dir.path()))
        .await
        .unwrap();

    let created = catalog
        .media
        .create(NewMedia::from_upload(
            "notes.txt",
            None,
            vec!["docs".to_string()],
            b"hello".to_vec(),
        ))
        .await
        .unwrap();

    assert_eq!(created.media.name, "notes.txt");
    assert!(dir.path().join(&created.media.id).exists());

    let content = catalog.media.view(&created.media.id).await.unwrap();
    assert_eq!(content.content.as_ref(), b"hello");
    assert_eq!(content.mime_type, "text/plain");
}

#[tokio::test]
async fn test_view_after_content_removed_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::from_config(&CatalogConfig::local(dir.path()))
        .await
        .unwrap();

    let created = catalog.media.create(text_media("a", &[])).await.unwrap();
    std::fs::remove_file(dir.path().join(&created.media.id)).unwrap();

    let err = catalog.media.view(&created.media.id).await.unwrap_err();
    assert!(err.is_file_not_found());
}

#[tokio::test]
async fn test_content_store_shared_with_view() {
    let catalog = setup_test_catalog();

    let created = catalog.media.create(text_media("a", &[])).await.unwrap();
    assert!(catalog.content_store.exists(&created.media.id).await.unwrap());
}
