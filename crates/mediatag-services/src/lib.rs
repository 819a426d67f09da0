//! Mediatag Services Layer
//!
//! This crate is the orchestration layer of the catalog: [`MediaService`]
//! composes the media repository, the tag repository and the content store to
//! create, search and view media, and [`TagService`] exposes the tag index.
//! Transport adapters depend on this crate only; it re-exports the types they
//! need from the lower layers.

pub mod services;
pub mod setup;

pub use mediatag_core::{
    CatalogConfig, ContentBackend, ErrorMetadata, FileError, Media, MediaError, MediaResult,
    NewMedia, Tag, TaggingPolicy,
};
pub use mediatag_db::{InMemoryMediaRepository, InMemoryTagRepository, MediaRepository, TagRepository};
pub use mediatag_storage::{create_content_store, ContentStore, LocalStorage, MemoryStorage};
pub use services::media::{CreateMediaError, CreatedMedia, MediaContent, MediaService, SearchResult};
pub use services::tag::TagService;
pub use setup::Catalog;
