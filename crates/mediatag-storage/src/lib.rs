//! Mediatag Storage Library
//!
//! This crate provides the content store abstraction and its implementations.
//! A content store keeps the raw bytes of a media item keyed by the media id,
//! independently of the media record itself.
//!
//! # Backends
//!
//! - [`MemoryStorage`]: ephemeral map, lost with the process.
//! - [`LocalStorage`]: one file per media id under a base directory.
//!
//! Both report a missing blob as [`FileError::NotFound`].

pub mod factory;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-memory")]
pub mod memory;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
pub mod traits;

// Re-export commonly used types
pub use factory::create_content_store;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use mediatag_core::{ContentBackend, FileError};
#[cfg(feature = "storage-memory")]
pub use memory::MemoryStorage;
pub use traits::{ContentStore, StorageResult};
