//! Club validation utilities

use thiserror::Error;

/// Errors that can occur during club validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClubValidationError {
    #[error("Club ID cannot be empty")]
    EmptyId,

    #[error("Club name must be at least {0} characters")]
    NameTooShort(usize),

    #[error("Club name exceeds maximum length of {0} characters")]
    NameTooLong(usize),

    #[error("Minimum joining age must be positive")]
    NonPositiveMinAge,
}

const MIN_NAME_LENGTH: usize = 5;
const MAX_NAME_LENGTH: usize = 20;

/// Validate a club name
///
/// Rules:
/// - Minimum 5 characters
/// - Maximum 20 characters
pub fn validate_club_name(name: &str) -> Result<(), ClubValidationError> {
    let length = name.chars().count();

    if length < MIN_NAME_LENGTH {
        return Err(ClubValidationError::NameTooShort(MIN_NAME_LENGTH));
    }

    if length > MAX_NAME_LENGTH {
        return Err(ClubValidationError::NameTooLong(MAX_NAME_LENGTH));
    }

    Ok(())
}

/// Validate a club's minimum joining age
///
/// Rules:
/// - Must be a positive integer
pub fn validate_min_age_for_join(min_age: u32) -> Result<(), ClubValidationError> {
    if min_age == 0 {
        return Err(ClubValidationError::NonPositiveMinAge);
    }

    Ok(())
}
