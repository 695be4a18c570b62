//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::UserValidationError;
use crate::domain::club::ClubId;

/// User identifier - an opaque non-empty string, assigned at creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Wrap an existing identifier after validation
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        Ok(Self(id))
    }

    /// Mint a fresh identifier (UUID v4)
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User entity
///
/// A user belongs to at most one club at a time, tracked by `club_id`.
/// The field is written only by the membership workflow: joining sets
/// it, leaving clears it. CRUD updates never touch it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    id: UserId,
    /// Display name, non-empty
    name: String,
    /// Age in years, positive
    age: u32,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Club the user belongs to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    club_id: Option<ClubId>,
}

impl User {
    /// Create a new, unaffiliated user
    pub fn new(id: UserId, name: impl Into<String>, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            created_at: Utc::now(),
            club_id: None,
        }
    }

    /// Rebuild a user from stored fields (repository use)
    pub fn restore(
        id: UserId,
        name: impl Into<String>,
        age: u32,
        created_at: DateTime<Utc>,
        club_id: Option<ClubId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            created_at,
            club_id,
        }
    }

    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn club_id(&self) -> Option<&ClubId> {
        self.club_id.as_ref()
    }

    /// Check whether the user currently belongs to a club
    pub fn is_affiliated(&self) -> bool {
        self.club_id.is_some()
    }

    // Mutators

    /// Update the display name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Update the age
    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    /// Record membership in a club. Membership workflow use only.
    pub fn join_club(&mut self, club_id: ClubId) {
        self.club_id = Some(club_id);
    }

    /// Clear the club membership. A no-op for unaffiliated users.
    pub fn leave_club(&mut self) {
        self.club_id = None;
    }
}
