//! Infrastructure services

mod club_service;
mod membership_service;
mod user_service;

pub use club_service::{ClubService, CreateClubRequest, UpdateClubRequest};
pub use membership_service::MembershipService;
pub use user_service::{CreateUserRequest, UpdateUserRequest, UserService};
