//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::club::ClubId;
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
///
/// All operations take the single map lock, which makes `assign_club`
/// a genuine check-and-set: no other writer can interleave between the
/// affiliation check and the write.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a repository with initial users
    pub fn with_users(users: Vec<User>) -> Self {
        let map = users
            .into_iter()
            .map(|user| (user.id().as_str().to_string(), user))
            .collect();

        Self {
            users: Arc::new(RwLock::new(map)),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn sorted_by_creation(mut users: Vec<User>) -> Vec<User> {
    users.sort_by(|a, b| {
        a.created_at()
            .cmp(&b.created_at())
            .then_with(|| a.id().as_str().cmp(b.id().as_str()))
    });
    users
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(id.as_str()).cloned())
    }

    async fn save(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        users.insert(user.id().as_str().to_string(), user.clone());
        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.remove(id.as_str()).is_some())
    }

    async fn list(&self, page: u32, page_size: u32) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;

        let all = sorted_by_creation(users.values().cloned().collect());

        Ok(all
            .into_iter()
            .skip(page as usize * page_size as usize)
            .take(page_size as usize)
            .collect())
    }

    async fn find_by_club(&self, club_id: &ClubId) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;

        let members = users
            .values()
            .filter(|user| user.club_id() == Some(club_id))
            .cloned()
            .collect();

        Ok(sorted_by_creation(members))
    }

    async fn assign_club(&self, id: &UserId, club_id: &ClubId) -> Result<User, DomainError> {
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
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("alice", 20);

        repo.save(user.clone()).await.unwrap();

        let retrieved = repo.get(user.id()).await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().name(), "alice");
    }

    #[tokio::test]
    async fn test_get_missing_user() {
        let repo = InMemoryUserRepository::new();

        let retrieved = repo.get(&UserId::generate()).await.unwrap();
        assert!(retrieved.is_none());
    }

    #[tokio::test]
    async fn test_save_is_upsert() {
        let repo = InMemoryUserRepository::new();
        let mut user = create_test_user("alice", 20);

        repo.save(user.clone()).await.unwrap();
        user.set_age(21);
        repo.save(user.clone()).await.unwrap();

        let retrieved = repo.get(user.id()).await.unwrap().unwrap();
        assert_eq!(retrieved.age(), 21);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("alice", 20);

        repo.save(user.clone()).await.unwrap();

        assert!(repo.delete(user.id()).await.unwrap());
        assert!(!repo.delete(user.id()).await.unwrap());
        assert!(repo.get(user.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_orders_by_creation_and_pages() {
        let repo = InMemoryUserRepository::new();

        for i in 0..25 {
            repo.save(create_test_user(&format!("user-{}", i), 20 + i))
                .await
                .unwrap();
        }

        let first = repo.list(0, 10).await.unwrap();
        let second = repo.list(1, 10).await.unwrap();
        let third = repo.list(2, 10).await.unwrap();
        let beyond = repo.list(3, 10).await.unwrap();

        assert_eq!(first.len(), 10);
        assert_eq!(second.len(), 10);
        assert_eq!(third.len(), 5);
        assert!(beyond.is_empty());

        // Pages follow creation order with no overlap.
        assert!(first.last().unwrap().created_at() <= second.first().unwrap().created_at());
        assert_ne!(first[0].id(), second[0].id());
    }

    #[tokio::test]
    async fn test_find_by_club_filters_members() {
        let repo = InMemoryUserRepository::new();
        let club_id = ClubId::generate();
        let other_club = ClubId::generate();

        let mut member = create_test_user("alice", 20);
        member.join_club(club_id.clone());
        let mut other = create_test_user("bob", 30);
        other.join_club(other_club);
        let unaffiliated = create_test_user("carol", 40);

        repo.save(member.clone()).await.unwrap();
        repo.save(other).await.unwrap();
        repo.save(unaffiliated).await.unwrap();

        let members = repo.find_by_club(&club_id).await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id(), member.id());
    }

    #[tokio::test]
    async fn test_assign_club_sets_membership() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("alice", 20);
        let club_id = ClubId::generate();

        repo.save(user.clone()).await.unwrap();

        let updated = repo.assign_club(user.id(), &club_id).await.unwrap();
        assert_eq!(updated.club_id(), Some(&club_id));

        let stored = repo.get(user.id()).await.unwrap().unwrap();
        assert_eq!(stored.club_id(), Some(&club_id));
    }

    #[tokio::test]
    async fn test_assign_club_rejects_affiliated_user() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("alice", 20);
        let first_club = ClubId::generate();
        let second_club = ClubId::generate();

        repo.save(user.clone()).await.unwrap();
        repo.assign_club(user.id(), &first_club).await.unwrap();

        let result = repo.assign_club(user.id(), &second_club).await;
        assert!(matches!(
            result,
            Err(DomainError::PreconditionFailed { .. })
        ));

        // The losing attempt must not have overwritten the membership.
        let stored = repo.get(user.id()).await.unwrap().unwrap();
        assert_eq!(stored.club_id(), Some(&first_club));
    }

    #[tokio::test]
    async fn test_assign_club_missing_user() {
        let repo = InMemoryUserRepository::new();

        let result = repo
            .assign_club(&UserId::generate(), &ClubId::generate())
            .await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_concurrent_assign_club_single_winner() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let user = create_test_user("alice", 20);
        let club_a = ClubId::generate();
        let club_b = ClubId::generate();

        repo.save(user.clone()).await.unwrap();

        let (a, b) = tokio::join!(
            repo.assign_club(user.id(), &club_a),
            repo.assign_club(user.id(), &club_b),
        );

        let successes = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
        assert_eq!(successes, 1);

        let stored = repo.get(user.id()).await.unwrap().unwrap();
        let winner = if a.is_ok() { &club_a } else { &club_b };
        assert_eq!(stored.club_id(), Some(winner));
    }
}
