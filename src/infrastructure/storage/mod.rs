//! Storage infrastructure - connection management

mod postgres;

pub use postgres::{connect_pool, PostgresConfig};
