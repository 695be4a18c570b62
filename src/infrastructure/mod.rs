//! Infrastructure layer - External service implementations

pub mod club;
pub mod logging;
pub mod observability;
pub mod services;
pub mod storage;
pub mod user;
