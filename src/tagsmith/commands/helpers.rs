use crate::error::{Result, TagsmithError};

/// Trim a user-supplied tag name, rejecting names that are empty after
/// trimming.
pub fn normalized_tag_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TagsmithError::Api("Tag name cannot be empty".to_string()));
    }
    Ok(trimmed)
}
