//! User infrastructure module
//!
//! Storage-backed implementations of the user repository, one keeping
//! records in memory and one persisting them to PostgreSQL.

mod postgres_repository;
mod repository;

pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
