//! Error types module
//!
//! Two families of errors flow through the catalog:
//!
//! - [`FileError`] describes content-store faults. `FileError::NotFound` is the
//!   "no blob stored for this media" condition; every other variant is a general
//!   storage fault.
//! - [`MediaError`] is what repositories and services return. Content-store faults
//!   are wrapped as `MediaError::File`, so the specific `FileError::NotFound` stays
//!   reachable through [`std::error::Error::source`] as well as through
//!   [`MediaError::is_file_not_found`].

use std::io;
use std::time::Duration;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like lookups of unknown media
    Debug,
    /// Warning level - for recoverable issues like deadlines
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata describing how an error should be presented by an outer adapter.
///
/// The core never talks HTTP itself; this only makes the error *kind*
/// discoverable so the transport layer can map it.
pub trait ErrorMetadata {
    /// HTTP status code an adapter should answer with
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "MEDIA_NOT_FOUND")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

/// Content store errors
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("file not found : media {0:?}")]
    NotFound(String),

    #[error("file error : media {media_id:?}: {source}")]
    Io {
        media_id: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("storage backend error: {0}")]
    Backend(String),
}

impl FileError {
    /// Wrap an I/O failure, turning `ErrorKind::NotFound` into [`FileError::NotFound`].
    pub fn from_io(media_id: &str, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            FileError::NotFound(media_id.to_string())
        } else {
            FileError::Io {
                media_id: media_id.to_string(),
                source: err,
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FileError::NotFound(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("media not found : {0:?}")]
    MediaNotFound(String),

    #[error("file error")]
    File(#[from] FileError),

    #[error("repository error: {0}")]
    Repository(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("operation cancelled")]
    Cancelled,
}

/// Result type for repository and service operations
pub type MediaResult<T> = Result<T, MediaError>;

impl MediaError {
    pub fn is_media_not_found(&self) -> bool {
        matches!(self, MediaError::MediaNotFound(_))
    }

    /// True when no content blob exists for the media, whatever the backend.
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, MediaError::File(err) if err.is_not_found())
    }

    /// True for any file-store fault, including [`MediaError::is_file_not_found`].
    pub fn is_file_error(&self) -> bool {
        matches!(self, MediaError::File(_))
    }

    /// Either not-found kind; adapters answer both the same way.
    pub fn is_not_found(&self) -> bool {
        self.is_media_not_found() || self.is_file_not_found()
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

fn media_error_static_metadata(err: &MediaError) -> (u16, &'static str, LogLevel) {
    match err {
        MediaError::MediaNotFound(_) => (404, "MEDIA_NOT_FOUND", LogLevel::Debug),
        MediaError::File(FileError::NotFound(_)) => (404, "FILE_NOT_FOUND", LogLevel::Debug),
        MediaError::File(_) => (500, "FILE_ERROR", LogLevel::Error),
        MediaError::Repository(_) => (500, "REPOSITORY_ERROR", LogLevel::Error),
        MediaError::InvalidInput(_) => (400, "INVALID_INPUT", LogLevel::Debug),
        MediaError::Timeout(_) => (504, "TIMEOUT", LogLevel::Warn),
        MediaError::Cancelled => (500, "CANCELLED", LogLevel::Warn),
    }
}

impl ErrorMetadata for MediaError {
    fn http_status_code(&self) -> u16 {
        media_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        media_error_static_metadata(self).1
    }

    fn log_level(&self) -> LogLevel {
        media_error_static_metadata(self).2
    }

    fn client_message(&self) -> String {
        match self {
            MediaError::MediaNotFound(_) | MediaError::File(FileError::NotFound(_)) => {
                "media not found".to_string()
            }
            MediaError::InvalidInput(ref msg) => msg.clone(),
            MediaError::Timeout(_) => "request timed out".to_string(),
            _ => "internal error".to_string(),
        }
    }
}
