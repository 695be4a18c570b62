//! Club service - CRUD operations for clubs

use std::sync::Arc;

use crate::domain::club::{
    validate_club_name, validate_min_age_for_join, Club, ClubId, ClubRepository,
};
use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;

/// Request to create a new club
#[derive(Debug, Clone)]
pub struct CreateClubRequest {
    pub name: String,
    pub min_age_for_join: u32,
}

/// Request to update an existing club
#[derive(Debug, Clone)]
pub struct UpdateClubRequest {
    pub id: String,
    pub name: String,
    pub min_age_for_join: u32,
}

/// Club service for CRUD operations
#[derive(Debug)]
pub struct ClubService<C: ClubRepository, R: UserRepository> {
    clubs: Arc<C>,
    users: Arc<R>,
    page_size: u32,
}

impl<C: ClubRepository, R: UserRepository> ClubService<C, R> {
    /// Create a new ClubService with the given repositories
    pub fn new(clubs: Arc<C>, users: Arc<R>, page_size: u32) -> Self {
        Self {
            clubs,
            users,
            page_size,
        }
    }

    /// Create a new club
    pub async fn create(&self, request: CreateClubRequest) -> Result<Club, DomainError> {
        validate_club_name(&request.name).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_min_age_for_join(request.min_age_for_join)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let club = Club::new(ClubId::generate(), request.name, request.min_age_for_join);

        self.clubs.save(club).await
    }

    /// Update an existing club
    pub async fn update(&self, request: UpdateClubRequest) -> Result<Club, DomainError> {
        let club_id = self.parse_club_id(&request.id)?;

        validate_club_name(&request.name).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_min_age_for_join(request.min_age_for_join)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let mut club = self
            .clubs
            .get(&club_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Club '{}' not found", request.id)))?;

        club.set_name(request.name);
        club.set_min_age_for_join(request.min_age_for_join);

        self.clubs.save(club).await
    }

    /// Get a club by ID
    pub async fn get(&self, id: &str) -> Result<Option<Club>, DomainError> {
        let club_id = self.parse_club_id(id)?;
        self.clubs.get(&club_id).await
    }

    /// List clubs in creation order, one page at a time
    pub async fn list(&self, page: u32) -> Result<Vec<Club>, DomainError> {
        self.clubs.list(page, self.page_size).await
    }

    /// Delete a club by ID
    ///
    /// Member records are left untouched; their club references go
    /// dangling and resolve to nothing on lookup.
    pub async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let club_id = self.parse_club_id(id)?;
        self.clubs.delete(&club_id).await
    }

    /// List the users belonging to a club, in creation order
    pub async fn members(&self, id: &str) -> Result<Vec<User>, DomainError> {
        let club_id = self.parse_club_id(id)?;
        self.users.find_by_club(&club_id).await
    }

    /// Parse and validate a club ID string
    fn parse_club_id(&self, id: &str) -> Result<ClubId, DomainError> {
        ClubId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserId;
    use crate::infrastructure::club::InMemoryClubRepository;
    use crate::infrastructure::user::InMemoryUserRepository;

    fn create_service() -> (
        ClubService<InMemoryClubRepository, InMemoryUserRepository>,
        Arc<InMemoryClubRepository>,
        Arc<InMemoryUserRepository>,
    ) {
        let clubs = Arc::new(InMemoryClubRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let service = ClubService::new(clubs.clone(), users.clone(), 10);
        (service, clubs, users)
    }

    fn create_request(name: &str, min_age: u32) -> CreateClubRequest {
        CreateClubRequest {
            name: name.to_string(),
            min_age_for_join: min_age,
        }
    }

    #[tokio::test]
    async fn test_create_club() {
        let (service, _clubs, _users) = create_service();

        let club = service.create(create_request("chess club", 15)).await.unwrap();

        assert_eq!(club.name(), "chess club");
        assert_eq!(club.min_age_for_join(), 15);
        assert!(!club.id().as_str().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_short_name() {
        let (service, _clubs, _users) = create_service();

        let result = service.create(create_request("club", 15)).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_rejects_long_name() {
        let (service, _clubs, _users) = create_service();

        let result = service
            .create(create_request(&"x".repeat(21), 15))
            .await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_rejects_zero_min_age() {
        let (service, _clubs, _users) = create_service();

        let result = service.create(create_request("chess club", 0)).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_update_club() {
        let (service, _clubs, _users) = create_service();

        let club = service.create(create_request("chess club", 15)).await.unwrap();
        let updated = service
            .update(UpdateClubRequest {
                id: club.id().as_str().to_string(),
                name: "rapid chess".to_string(),
                min_age_for_join: 18,
            })
            .await
            .unwrap();

        assert_eq!(updated.name(), "rapid chess");
        assert_eq!(updated.min_age_for_join(), 18);
        assert_eq!(updated.created_at(), club.created_at());
    }

    #[tokio::test]
    async fn test_update_missing_club() {
        let (service, _clubs, _users) = create_service();

        let result = service
            .update(UpdateClubRequest {
                id: ClubId::generate().as_str().to_string(),
                name: "chess club".to_string(),
                min_age_for_join: 15,
            })
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_get_club() {
        let (service, _clubs, _users) = create_service();

        let club = service.create(create_request("chess club", 15)).await.unwrap();

        let found = service.get(club.id().as_str()).await.unwrap();
        assert!(found.is_some());

        let missing = service.get(ClubId::generate().as_str()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_list_pages_in_creation_order() {
        let (service, _clubs, _users) = create_service();

        for i in 0..12 {
            service
                .create(create_request(&format!("club-{:02}", i), 10))
                .await
                .unwrap();
        }

        let first = service.list(0).await.unwrap();
        let second = service.list(1).await.unwrap();

        assert_eq!(first.len(), 10);
        assert_eq!(second.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_club_keeps_members() {
        let (service, _clubs, users) = create_service();

        let club = service.create(create_request("chess club", 15)).await.unwrap();
        let user = users
            .save(User::new(UserId::generate(), "alice", 20))
            .await
            .unwrap();
        users.assign_club(user.id(), club.id()).await.unwrap();

        assert!(service.delete(club.id().as_str()).await.unwrap());

        // The user record survives with a dangling club reference.
        let stored = users.get(user.id()).await.unwrap().unwrap();
        assert_eq!(stored.club_id(), Some(club.id()));
    }

    #[tokio::test]
    async fn test_members_lists_in_creation_order() {
        let (service, _clubs, users) = create_service();

        let club = service.create(create_request("chess club", 15)).await.unwrap();

        for name in ["alice", "bob", "carol"] {
            let user = users
                .save(User::new(UserId::generate(), name, 20))
                .await
                .unwrap();
            users.assign_club(user.id(), club.id()).await.unwrap();
        }

        let members = service.members(club.id().as_str()).await.unwrap();
        assert_eq!(members.len(), 3);
        assert!(members
            .windows(2)
            .all(|pair| pair[0].created_at() <= pair[1].created_at()));
    }

    #[tokio::test]
    async fn test_members_of_empty_club() {
        let (service, _clubs, _users) = create_service();

        let club = service.create(create_request("chess club", 15)).await.unwrap();

        let members = service.members(club.id().as_str()).await.unwrap();
        assert!(members.is_empty());
    }
}
