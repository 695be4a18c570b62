//! User validation utilities

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    #[error("User ID cannot be empty")]
    EmptyId,

    #[error("User name cannot be empty")]
    EmptyName,

    #[error("User name exceeds maximum length of {0} characters")]
    NameTooLong(usize),

    #[error("User age must be positive")]
    NonPositiveAge,
}

const MAX_NAME_LENGTH: usize = 100;

/// Validate a user name
///
/// Rules:
/// - Cannot be empty or whitespace-only
/// - Maximum 100 characters
pub fn validate_user_name(name: &str) -> Result<(), UserValidationError> {
    if name.trim().is_empty() {
        return Err(UserValidationError::EmptyName);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(UserValidationError::NameTooLong(MAX_NAME_LENGTH));
    }

    Ok(())
}

/// Validate a user age
///
/// Rules:
/// - Must be a positive integer
pub fn validate_user_age(age: u32) -> Result<(), UserValidationError> {
    if age == 0 {
        return Err(UserValidationError::NonPositiveAge);
    }

    Ok(())
}
