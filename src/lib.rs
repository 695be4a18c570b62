//! Club membership server
//!
//! An HTTP API for managing users and clubs with a guarded join workflow:
//! - User and club CRUD with paged listings in creation order
//! - Single-membership rule with an age gate on joining
//! - In-memory or PostgreSQL storage backends

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use config::StorageBackend;
use domain::club::ClubRepository;
use domain::user::UserRepository;
use infrastructure::club::{InMemoryClubRepository, PostgresClubRepository};
use infrastructure::services::{ClubService, MembershipService, UserService};
use infrastructure::storage::{connect_pool, PostgresConfig};
use infrastructure::user::{InMemoryUserRepository, PostgresUserRepository};

/// Create the application state with all services initialized
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let page_size = config.pagination.page_size;

    match config.storage.backend {
        StorageBackend::Postgres => {
            let url = config
                .storage
                .database_url
                .clone()
                .or_else(|| std::env::var("DATABASE_URL").ok())
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "storage.database_url or DATABASE_URL is required for the postgres backend"
                    )
                })?;

            info!("Connecting to PostgreSQL...");
            let pool = connect_pool(&PostgresConfig::new(url)).await?;
            info!("PostgreSQL connection established");

            let users = Arc::new(PostgresUserRepository::new(pool.clone()));
            let clubs = Arc::new(PostgresClubRepository::new(pool));
            users.ensure_schema().await?;
            clubs.ensure_schema().await?;

            Ok(build_state(users, clubs, page_size))
        }
        StorageBackend::Memory => {
            info!("Using in-memory storage");
            let users = Arc::new(InMemoryUserRepository::new());
            let clubs = Arc::new(InMemoryClubRepository::new());

            Ok(build_state(users, clubs, page_size))
        }
    }
}

fn build_state<U, C>(users: Arc<U>, clubs: Arc<C>, page_size: u32) -> AppState
where
    U: UserRepository + 'static,
    C: ClubRepository + 'static,
{
    AppState {
        user_service: Arc::new(UserService::new(users.clone(), clubs.clone(), page_size)),
        club_service: Arc::new(ClubService::new(clubs.clone(), users.clone(), page_size)),
        membership_service: Arc::new(MembershipService::new(users, clubs)),
    }
}
