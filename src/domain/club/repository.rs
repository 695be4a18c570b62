//! Club repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Club, ClubId};
use crate::domain::DomainError;

/// Repository trait for club storage
#[async_trait]
pub trait ClubRepository: Send + Sync + Debug {
    /// Get a club by id
    async fn get(&self, id: &ClubId) -> Result<Option<Club>, DomainError>;

    /// Upsert a club by id. The record is durable when this returns.
    async fn save(&self, club: Club) -> Result<Club, DomainError>;

    /// Delete a club. Returns whether a record existed.
    async fn delete(&self, id: &ClubId) -> Result<bool, DomainError>;

    /// List one page of clubs, ordered by creation time ascending
    async fn list(&self, page: u32, page_size: u32) -> Result<Vec<Club>, DomainError>;
}
