//! In-memory club repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::club::{Club, ClubId, ClubRepository};
use crate::domain::DomainError;

/// In-memory implementation of ClubRepository
#[derive(Debug)]
pub struct InMemoryClubRepository {
    clubs: Arc<RwLock<HashMap<String, Club>>>,
}

impl InMemoryClubRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            clubs: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a repository with initial clubs
    pub fn with_clubs(clubs: Vec<Club>) -> Self {
        let map = clubs
            .into_iter()
            .map(|club| (club.id().as_str().to_string(), club))
            .collect();

        Self {
            clubs: Arc::new(RwLock::new(map)),
        }
    }
}

impl Default for InMemoryClubRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn sorted_by_creation(mut clubs: Vec<Club>) -> Vec<Club> {
    clubs.sort_by(|a, b| {
        a.created_at()
            .cmp(&b.created_at())
            .then_with(|| a.id().as_str().cmp(b.id().as_str()))
    });
    clubs
}

#[async_trait]
impl ClubRepository for InMemoryClubRepository {
    async fn get(&self, id: &ClubId) -> Result<Option<Club>, DomainError> {
        let clubs = self.clubs.read().await;
        Ok(clubs.get(id.as_str()).cloned())
    }

    async fn save(&self, club: Club) -> Result<Club, DomainError> {
        let mut clubs = self.clubs.write().await;
        clubs.insert(club.id().as_str().to_string(), club.clone());
        Ok(club)
    }

    async fn delete(&self, id: &ClubId) -> Result<bool, DomainError> {
        let mut clubs = self.clubs.write().await;
        Ok(clubs.remove(id.as_str()).is_some())
    }

    async fn list(&self, page: u32, page_size: u32) -> Result<Vec<Club>, DomainError> {
        let clubs = self.clubs.read().await;

        let all = sorted_by_creation(clubs.values().cloned().collect());

        Ok(all
            .into_iter()
            .skip(page as usize * page_size as usize)
            .take(page_size as usize)
            .collect())
    }
}
