//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserId};
use crate::domain::club::ClubId;
use crate::domain::DomainError;

/// Repository trait for user storage
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by id
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Upsert a user by id. The record is durable when this returns.
    async fn save(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user. Returns whether a record existed.
    async fn delete(&self, id: &UserId) -> Result<bool, DomainError>;

    /// List one page of users, ordered by creation time ascending
    async fn list(&self, page: u32, page_size: u32) -> Result<Vec<User>, DomainError>;

    /// All users whose membership points at the given club, ordered by
    /// creation time ascending
    async fn find_by_club(&self, club_id: &ClubId) -> Result<Vec<User>, DomainError>;

    /// Conditionally record a club membership: sets `club_id` if and
    /// only if the stored user is currently unaffiliated, and returns
    /// the updated user.
    ///
    /// The check and the write are a single atomic step, so two racing
    /// callers can never both succeed for one user. Errors:
    /// - `NotFound` when no user with this id exists
    /// - `PreconditionFailed` when the user already has a club
    async fn assign_club(&self, id: &UserId, club_id: &ClubId) -> Result<User, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock user repository for testing
    #[derive(Debug, Default)]
    pub struct MockUserRepository {
        users: Arc<RwLock<HashMap<String, User>>>,
        should_fail: Arc<RwLock<bool>>,
    }

    impl MockUserRepository {
        /// Create a new mock repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Set whether operations should fail
        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        async fn check_should_fail(&self) -> Result<(), DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::storage("Mock repository configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;
            Ok(users.get(id.as_str()).cloned())
        }

        async fn save(&self, user: User) -> Result<User, DomainError> {
            self.check_should_fail().await?;
            let mut users = self.users.write().await;
            users.insert(user.id().as_str().to_string(), user.clone());
            Ok(user)
        }

        async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
            self.check_should_fail().await?;
            let mut users = self.users.write().await;
            Ok(users.remove(id.as_str()).is_some())
        }

        async fn list(&self, page: u32, page_size: u32) -> Result<Vec<User>, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;

            let mut all: Vec<User> = users.values().cloned().collect();
            all.sort_by(|a, b| a.created_at().cmp(&b.created_at()));

            Ok(all
                .into_iter()
                .skip(page as usize * page_size as usize)
                .take(page_size as usize)
                .collect())
        }

        async fn find_by_club(&self, club_id: &ClubId) -> Result<Vec<User>, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;

            let mut members: Vec<User> = users
                .values()
                .filter(|u| u.club_id() == Some(club_id))
                .cloned()
                .collect();
            members.sort_by(|a, b| a.created_at().cmp(&b.created_at()));

            Ok(members)
        }

        async fn assign_club(&self, id: &UserId, club_id: &ClubId) -> Result<User, DomainError> {
            self.check_should_fail().await?;
            let mut users = self.users.write().await;

            let user = users
                .get_mut(id.as_str())
                .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;

            if user.is_affiliated() {
                return Err(DomainError::precondition_failed(format!(
                    "User '{}' already belongs to a club",
                    id
                )));
            }

            user.join_club(club_id.clone());
            Ok(user.clone())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn create_test_user(name: &str, age: u32) -> User {
            User::new(UserId::generate(), name, age)
        }

        #[tokio::test]
        async fn test_save_and_get() {
            let repo = MockUserRepository::new();
            let user = create_test_user("alice", 20);

            repo.save(user.clone()).await.unwrap();

            let retrieved = repo.get(user.id()).await.unwrap();
            assert!(retrieved.is_some());
            assert_eq!(retrieved.unwrap().name(), "alice");
        }

        #[tokio::test]
        async fn test_assign_club_sets_membership() {
            let repo = MockUserRepository::new();
            let user = create_test_user("alice", 20);
            let club_id = ClubId::generate();

            repo.save(user.clone()).await.unwrap();

            let updated = repo.assign_club(user.id(), &club_id).await.unwrap();
            assert_eq!(updated.club_id(), Some(&club_id));
        }

        #[tokio::test]
        async fn test_assign_club_rejects_affiliated_user() {
            let repo = MockUserRepository::new();
            let mut user = create_test_user("alice", 20);
            user.join_club(ClubId::generate());
            repo.save(user.clone()).await.unwrap();

            let result = repo.assign_club(user.id(), &ClubId::generate()).await;
            assert!(matches!(
                result,
                Err(DomainError::PreconditionFailed { .. })
            ));
        }

        #[tokio::test]
        async fn test_assign_club_missing_user() {
            let repo = MockUserRepository::new();

            let result = repo
                .assign_club(&UserId::generate(), &ClubId::generate())
                .await;
            assert!(matches!(result, Err(DomainError::NotFound { .. })));
        }

        #[tokio::test]
        async fn test_should_fail_propagates_storage_error() {
            let repo = MockUserRepository::new();
            repo.set_should_fail(true).await;

            let result = repo.get(&UserId::generate()).await;
            assert!(matches!(result, Err(DomainError::Storage { .. })));
        }
    }
}
