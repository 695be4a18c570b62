//! Shared API types - error format and JSON extraction

pub mod error;
pub mod json;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
