//! Repository doubles for testing failure paths
//!
//! Each double wraps the in-memory repository and fails selected operations.

use async_trait::async_trait;
use mediatag_core::{Media, MediaError, MediaResult, Tag};
use std::collections::{HashMap, HashSet};

use crate::{InMemoryMediaRepository, InMemoryTagRepository, MediaRepository, TagRepository};

/// Tag repository that refuses to link selected tag names.
#[derive(Clone, Default)]
pub struct FailingTagRepository {
    inner: InMemoryTagRepository,
    failing_links: HashSet<String>,
    fail_tags_for_medias: bool,
}

impl FailingTagRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `link` call for `tag_name` fail.
    pub fn failing_link(mut self, tag_name: impl Into<String>) -> Self {
        self.failing_links.insert(tag_name.into());
        self
    }

    /// Make `get_tags_for_medias` fail.
    pub fn failing_tags_for_medias(mut self) -> Self {
        self.fail_tags_for_medias = true;
        self
    }

    pub fn inner(&self) -> &InMemoryTagRepository {
        &self.inner
    }
}

#[async_trait]
impl TagRepository for FailingTagRepository {
    async fn get_all(&self) -> MediaResult<HashMap<String, Tag>> {
        self.inner.get_all().await
    }

    async fn get_media_ids_for_tag(&self, name: &str) -> MediaResult<Vec<String>> {
        self.inner.get_media_ids_for_tag(name).await
    }

    async fn get_tags_for_medias(
        &self,
        media_ids: &[String],
    ) -> MediaResult<HashMap<String, Vec<Tag>>> {
        if self.fail_tags_for_medias {
            return Err(MediaError::Repository(
                "tag lookup unavailable".to_string(),
            ));
        }
        self.inner.get_tags_for_medias(media_ids).await
    }

    async fn create(&self, name: &str) -> MediaResult<Tag> {
        self.inner.create(name).await
    }

    async fn link(&self, tag_name: &str, media_id: &str) -> MediaResult<()> {
        if self.failing_links.contains(tag_name) {
            return Err(MediaError::Repository(format!(
                "cannot link tag {:?} to media {:?}",
                tag_name, media_id
            )));
        }
        self.inner.link(tag_name, media_id).await
    }
}

/// Media repository with switchable failures.
#[derive(Clone, Default)]
pub struct FailingMediaRepository {
    inner: InMemoryMediaRepository,
    fail_create: bool,
    fail_get_by_ids: bool,
}

impl FailingMediaRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn failing_get_by_ids(mut self) -> Self {
        self.fail_get_by_ids = true;
        self
    }

    pub fn inner(&self) -> &InMemoryMediaRepository {
        &self.inner
    }
}

#[async_trait]
impl MediaRepository for FailingMediaRepository {
    async fn create(&self, name: &str, mime_type: &str) -> MediaResult<Media> {
        if self.fail_create {
            return Err(MediaError::Repository("media store unavailable".to_string()));
        }
        self.inner.create(name, mime_type).await
    }

    async fn get_by_ids(&self, ids: &[String]) -> MediaResult<HashMap<String, Media>> {
        if self.fail_get_by_ids {
            return Err(MediaError::Repository("media store unavailable".to_string()));
        }
        self.inner.get_by_ids(ids).await
    }
}
