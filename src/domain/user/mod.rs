//! User domain
//!
//! This module provides the user entity, its validation rules, and the
//! repository trait the services consume.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId};
pub use repository::UserRepository;
pub use validation::{validate_user_age, validate_user_name, UserValidationError};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
