//! Field rules shared by every entity.
//!
//! Names and titles are limited to [`MAX_NAME_LENGTH`] characters and may not
//! be empty; priorities may not be negative.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a room/board name or todo title, in characters.
pub const MAX_NAME_LENGTH: usize = 50;

/// Lowest accepted priority.
pub const MIN_PRIORITY: i32 = 0;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a required display string (`name` or `title`).
///
/// Length is counted in characters, so multi-byte names are measured the way
/// a user would count them.
pub fn validate_name(field: &str, value: &str) -> Result<(), CoreError> {
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }

    let len = value.chars().count();
    if len > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "{field} must be {MAX_NAME_LENGTH} characters or less, got {len}"
        )));
    }

    Ok(())
}

/// Validate that a priority is not negative.
pub fn validate_priority(priority: i32) -> Result<(), CoreError> {
    if priority < MIN_PRIORITY {
        return Err(CoreError::Validation(format!(
            "priority must be {MIN_PRIORITY} or greater, got {priority}"
        )));
    }
    Ok(())
}
