//! API layer - HTTP endpoints and middleware

pub mod clubs;
pub mod health;
pub mod membership;
pub mod middleware;
pub mod router;
pub mod state;
pub mod types;
pub mod users;

pub use router::{create_router, create_router_with_state};
pub use state::AppState;
