//! MIME type resolution for uploaded files

use std::path::Path;

/// Used when the extension does not identify a type.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Guess the MIME type from a filename's extension.
pub fn mime_type_for_filename(filename: &str) -> String {
    mime_guess::from_path(Path::new(filename))
        .first()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string())
}
