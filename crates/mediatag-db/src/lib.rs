//! Repositories for the media catalog
//!
//! This crate defines the repository contracts for media records and the
//! tag index, together with their in-memory implementations. Each repository
//! owns its lock and its maps; instances are shared through `Arc` and passed
//! explicitly to the services that use them.

pub mod media;
pub mod tag;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use media::{InMemoryMediaRepository, MediaRepository};
pub use tag::{InMemoryTagRepository, TagRepository};
