//! Club entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::ClubValidationError;

/// Club identifier - an opaque non-empty string, assigned at creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClubId(String);

impl ClubId {
    /// Wrap an existing identifier after validation
    pub fn new(id: impl Into<String>) -> Result<Self, ClubValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ClubValidationError::EmptyId);
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

impl TryFrom<String> for ClubId {
    type Error = ClubValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClubId> for String {
    fn from(id: ClubId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ClubId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Club entity
///
/// A club holds no member collection of its own; membership lives on
/// the user side as a foreign key and is derived by query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Club {
    /// Unique identifier for the club
    id: ClubId,
    /// Club name, 5-20 characters
    name: String,
    /// Minimum age required to join
    min_age_for_join: u32,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl Club {
    /// Create a new club
    pub fn new(id: ClubId, name: impl Into<String>, min_age_for_join: u32) -> Self {
        Self {
            id,
            name: name.into(),
            min_age_for_join,
            created_at: Utc::now(),
        }
    }

    /// Rebuild a club from stored fields (repository use)
    pub fn restore(
        id: ClubId,
        name: impl Into<String>,
        min_age_for_join: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            min_age_for_join,
            created_at,
        }
    }

    // Getters

    pub fn id(&self) -> &ClubId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_age_for_join(&self) -> u32 {
        self.min_age_for_join
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Check the age-based join precondition. The comparison is
    /// inclusive: an applicant exactly at the minimum age is admitted.
    pub fn admits_age(&self, age: u32) -> bool {
        age >= self.min_age_for_join
    }

    // Mutators

    /// Update the club name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Update the minimum joining age
    pub fn set_min_age_for_join(&mut self, min_age_for_join: u32) {
        self.min_age_for_join = min_age_for_join;
    }
}
