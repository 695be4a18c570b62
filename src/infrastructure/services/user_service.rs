//! User service - CRUD operations for users

use std::sync::Arc;

use crate::domain::club::{Club, ClubRepository};
use crate::domain::user::{validate_user_age, validate_user_name, User, UserId, UserRepository};
use crate::domain::DomainError;

/// Request to create a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
    pub age: u32,
}

/// Request to update an existing user
///
/// Only the profile fields are writable here; the club membership is
/// owned by the membership workflow and the creation timestamp never
/// changes.
#[derive(Debug, Clone)]
pub struct UpdateUserRequest {
    pub id: String,
    pub name: String,
    pub age: u32,
}

/// User service for CRUD operations
#[derive(Debug)]
pub struct UserService<R: UserRepository, C: ClubRepository> {
    users: Arc<R>,
    clubs: Arc<C>,
    page_size: u32,
}

impl<R: UserRepository, C: ClubRepository> UserService<R, C> {
    /// Create a new UserService with the given repositories
    pub fn new(users: Arc<R>, clubs: Arc<C>, page_size: u32) -> Self {
        Self {
            users,
            clubs,
            page_size,
        }
    }

    /// Create a new user
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        validate_user_name(&request.name).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_user_age(request.age).map_err(|e| DomainError::validation(e.to_string()))?;

        let user = User::new(UserId::generate(), request.name, request.age);

        self.users.save(user).await
    }

    /// Update an existing user's profile fields
    pub async fn update(&self, request: UpdateUserRequest) -> Result<User, DomainError> {
        let user_id = self.parse_user_id(&request.id)?;

        validate_user_name(&request.name).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_user_age(request.age).map_err(|e| DomainError::validation(e.to_string()))?;

        let mut user = self
            .users
            .get(&user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", request.id)))?;

        user.set_name(request.name);
        user.set_age(request.age);

        self.users.save(user).await
    }

    /// Get a user by ID
    pub async fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        let user_id = self.parse_user_id(id)?;
        self.users.get(&user_id).await
    }

    /// List users in creation order, one page at a time
    pub async fn list(&self, page: u32) -> Result<Vec<User>, DomainError> {
        self.users.list(page, self.page_size).await
    }

    /// Delete a user by ID
    pub async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let user_id = self.parse_user_id(id)?;
        self.users.delete(&user_id).await
    }

    /// Get the club a user belongs to
    ///
    /// Returns `Ok(None)` when the user is missing, unaffiliated, or
    /// references a club record that no longer exists.
    pub async fn club_of(&self, id: &str) -> Result<Option<Club>, DomainError> {
        let user_id = self.parse_user_id(id)?;

        let Some(user) = self.users.get(&user_id).await? else {
            return Ok(None);
        };

        let Some(club_id) = user.club_id() else {
            return Ok(None);
        };

        self.clubs.get(club_id).await
    }

    /// Parse and validate a user ID string
    fn parse_user_id(&self, id: &str) -> Result<UserId, DomainError> {
        UserId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))
    }
}
