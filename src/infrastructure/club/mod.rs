//! Club infrastructure module
//!
//! Storage-backed implementations of the club repository.

mod postgres_repository;
mod repository;

pub use postgres_repository::PostgresClubRepository;
pub use repository::InMemoryClubRepository;
