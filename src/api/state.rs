//! Application state for shared services

use std::sync::Arc;

use crate::domain::club::ClubRepository;
use crate::domain::user::UserRepository;
use crate::domain::{Club, DomainError, JoinResult, User};
use crate::infrastructure::services::{
    ClubService, CreateClubRequest, CreateUserRequest, MembershipService, UpdateClubRequest,
    UpdateUserRequest, UserService,
};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub club_service: Arc<dyn ClubServiceTrait>,
    pub membership_service: Arc<dyn MembershipServiceTrait>,
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError>;
    async fn update(&self, request: UpdateUserRequest) -> Result<User, DomainError>;
    async fn get(&self, id: &str) -> Result<Option<User>, DomainError>;
    async fn list(&self, page: u32) -> Result<Vec<User>, DomainError>;
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
    async fn club_of(&self, id: &str) -> Result<Option<Club>, DomainError>;
}

/// Trait for club service operations
#[async_trait::async_trait]
pub trait ClubServiceTrait: Send + Sync {
    async fn create(&self, request: CreateClubRequest) -> Result<Club, DomainError>;
    async fn update(&self, request: UpdateClubRequest) -> Result<Club, DomainError>;
    async fn get(&self, id: &str) -> Result<Option<Club>, DomainError>;
    async fn list(&self, page: u32) -> Result<Vec<Club>, DomainError>;
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
    async fn members(&self, id: &str) -> Result<Vec<User>, DomainError>;
}

/// Trait for the membership workflow
#[async_trait::async_trait]
pub trait MembershipServiceTrait: Send + Sync {
    async fn join(&self, club_id: &str, user_id: &str) -> Result<JoinResult, DomainError>;
    async fn leave(&self, user_id: &str) -> Result<Option<User>, DomainError>;
}

// Implement traits for the actual services

#[async_trait::async_trait]
impl<R, C> UserServiceTrait for UserService<R, C>
where
    R: UserRepository + 'static,
    C: ClubRepository + 'static,
{
    async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        UserService::create(self, request).await
    }

    async fn update(&self, request: UpdateUserRequest) -> Result<User, DomainError> {
        UserService::update(self, request).await
    }

    async fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        UserService::get(self, id).await
    }

    async fn list(&self, page: u32) -> Result<Vec<User>, DomainError> {
        UserService::list(self, page).await
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        UserService::delete(self, id).await
    }

    async fn club_of(&self, id: &str) -> Result<Option<Club>, DomainError> {
        UserService::club_of(self, id).await
    }
}

#[async_trait::async_trait]
impl<C, R> ClubServiceTrait for ClubService<C, R>
where
    C: ClubRepository + 'static,
    R: UserRepository + 'static,
{
    async fn create(&self, request: CreateClubRequest) -> Result<Club, DomainError> {
        ClubService::create(self, request).await
    }

    async fn update(&self, request: UpdateClubRequest) -> Result<Club, DomainError> {
        ClubService::update(self, request).await
    }

    async fn get(&self, id: &str) -> Result<Option<Club>, DomainError> {
        ClubService::get(self, id).await
    }

    async fn list(&self, page: u32) -> Result<Vec<Club>, DomainError> {
        ClubService::list(self, page).await
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        ClubService::delete(self, id).await
    }

    async fn members(&self, id: &str) -> Result<Vec<User>, DomainError> {
        ClubService::members(self, id).await
    }
}

#[async_trait::async_trait]
impl<U, C> MembershipServiceTrait for MembershipService<U, C>
where
    U: UserRepository + 'static,
    C: ClubRepository + 'static,
{
    async fn join(&self, club_id: &str, user_id: &str) -> Result<JoinResult, DomainError> {
        MembershipService::join(self, club_id, user_id).await
    }

    async fn leave(&self, user_id: &str) -> Result<Option<User>, DomainError> {
        MembershipService::leave(self, user_id).await
    }
}
