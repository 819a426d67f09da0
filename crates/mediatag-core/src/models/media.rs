use serde::{Deserialize, Serialize};

use crate::mime::mime_type_for_filename;

/// Cataloged media record, separate from its content blob.
///
/// The `id` is assigned by the media repository on creation and is never
/// supplied by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub id: String,
    pub name: String,
    pub mime_type: String,
}

/// Input for creating a media item: metadata, requested tags and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMedia {
    pub name: String,
    pub tags: Vec<String>,
    pub content: Vec<u8>,
    pub mime_type: String,
}

impl NewMedia {
    pub fn new(
        name: impl Into<String>,
        tags: Vec<String>,
        content: Vec<u8>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            tags,
            content,
            mime_type: mime_type.into(),
        }
    }

    /// Build the creation input for an uploaded file.
    ///
    /// The display name falls back to the uploaded filename when `name` is
    /// missing or empty, and the MIME type is derived from the filename's
    /// extension (`application/octet-stream` when unknown).
    pub fn from_upload(
        filename: &str,
        name: Option<String>,
        tags: Vec<String>,
        content: Vec<u8>,
    ) -> Self {
        let name = name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| filename.to_string());

        Self {
            name,
            tags,
            content,
            mime_type: mime_type_for_filename(filename),
        }
    }
}
