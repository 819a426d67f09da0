//! Input validation

use crate::error::{MediaError, MediaResult};

pub const MAX_TAG_NAME_LENGTH: usize = 255;

/// Validate a tag name before explicit registration.
pub fn validate_tag_name(name: &str) -> MediaResult<()> {
    if name.trim().is_empty() {
        return Err(MediaError::InvalidInput("empty tag name".to_string()));
    }

    if name.chars().count() > MAX_TAG_NAME_LENGTH {
        return Err(MediaError::InvalidInput(format!(
            "tag name exceeds {} characters",
            MAX_TAG_NAME_LENGTH
        )));
    }

    Ok(())
}
