//! Domain layer - Core business logic and entities

pub mod club;
pub mod error;
pub mod membership;
pub mod user;

pub use club::{Club, ClubId, ClubRepository};
pub use error::DomainError;
pub use membership::{JoinDecision, JoinResult};
pub use user::{User, UserId, UserRepository};
