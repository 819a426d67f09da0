use mediatag_core::validation::validate_tag_name;
use mediatag_core::{MediaResult, Tag};
use mediatag_db::TagRepository;
use std::sync::Arc;
use std::time::Duration;

use super::with_deadline;

/// Thin facade over the tag repository.
#[derive(Clone)]
pub struct TagService {
    tag_repository: Arc<dyn TagRepository>,
    operation_timeout: Option<Duration>,
}

impl TagService {
    pub fn new(tag_repository: Arc<dyn TagRepository>) -> Self {
        Self {
            tag_repository,
            operation_timeout: None,
        }
    }

    pub fn with_operation_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.operation_timeout = timeout;
        self
    }

    /// Every registered tag, sorted by name.
    #[tracing::instrument(skip(self))]
    pub async fn get_all(&self) -> MediaResult<Vec<Tag>> {
        with_deadline(self.operation_timeout, self.sorted_tags()).await
    }

    async fn sorted_tags(&self) -> MediaResult<Vec<Tag>> {
        let mut tags: Vec<Tag> = self.tag_repository.get_all().await?.into_values().collect();
        tags.sort();
        Ok(tags)
    }

    /// Register a tag. Registering an existing tag is a no-op.
    #[tracing::instrument(skip(self), fields(tag.name = %name))]
    pub async fn create(&self, name: &str) -> MediaResult<Tag> {
        validate_tag_name(name)?;

        with_deadline(self.operation_timeout, self.tag_repository.create(name)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediatag_core::MediaError;
    use mediatag_db::InMemoryTagRepository;

    #[tokio::test]
    async fn test_get_all_is_sorted() {
        let service = TagService::new(Arc::new(InMemoryTagRepository::new()));

        service.create("zebra").await.unwrap();
        service.create("alpha").await.unwrap();
        service.create("alpha").await.unwrap();

        let tags = service.get_all().await.unwrap();
        assert_eq!(tags, vec![Tag::new("alpha"), Tag::new("zebra")]);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let repository = InMemoryTagRepository::new();
        let service = TagService::new(Arc::new(repository.clone()));

        let result = service.create("  ").await;
        assert!(matches!(result, Err(MediaError::InvalidInput(_))));
        assert!(repository.get_all().await.unwrap().is_empty());
    }
}
