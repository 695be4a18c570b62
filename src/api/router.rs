use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use super::clubs;
use super::health;
use super::membership;
use super::state::AppState;
use super::users;

/// Create a minimal router without state (for testing/backward compatibility)
/// Note: /ready endpoint is not available without state
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .layer(TraceLayer::new_for_http())
}

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // User management
        .route("/api/user", post(users::create_user))
        .route("/api/user", put(users::update_user))
        .route("/api/user/list", get(users::list_users))
        .route("/api/user/list/{page}", get(users::list_users_page))
        .route("/api/user/club/{user_id}", get(users::get_user_club))
        .route("/api/user/{user_id}", get(users::get_user))
        .route("/api/user/{user_id}", delete(users::delete_user))
        // Club management
        .route("/api/club", post(clubs::create_club))
        .route("/api/club", put(clubs::update_club))
        .route("/api/club/list", get(clubs::list_clubs))
        .route("/api/club/list/{page}", get(clubs::list_clubs_page))
        .route("/api/club/members/{club_id}", get(clubs::get_club_members))
        // Membership workflow
        .route("/api/club/join", post(membership::join_club))
        .route("/api/club/leave", post(membership::leave_club))
        .route("/api/club/{club_id}", get(clubs::get_club))
        .route("/api/club/{club_id}", delete(clubs::delete_club))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
