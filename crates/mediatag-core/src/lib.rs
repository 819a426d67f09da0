//! Mediatag Core Library
//!
//! This crate provides the domain models, error types, configuration and
//! validation shared by every mediatag component.

pub mod config;
pub mod error;
pub mod mime;
pub mod models;
pub mod policy;
pub mod storage_types;
pub mod validation;

// Re-export commonly used types
pub use config::CatalogConfig;
pub use error::{ErrorMetadata, FileError, LogLevel, MediaError, MediaResult};
pub use models::{Media, NewMedia, Tag};
pub use policy::TaggingPolicy;
pub use storage_types::ContentBackend;
