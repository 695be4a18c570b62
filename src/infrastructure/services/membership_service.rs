//! Membership service - the club join/leave workflow

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::club::{ClubId, ClubRepository};
use crate::domain::membership::{decide, JoinDecision, JoinResult};
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::observability::{record_join_attempt, record_leave};

/// Coordinates the membership workflow across the user and club
/// repositories.
///
/// The service only reports `JoinResult::Success` after the membership
/// has been persisted; an eligibility verdict alone is never surfaced
/// as success.
#[derive(Debug)]
pub struct MembershipService<U: UserRepository, C: ClubRepository> {
    users: Arc<U>,
    clubs: Arc<C>,
}

impl<U: UserRepository, C: ClubRepository> MembershipService<U, C> {
    /// Create a new membership service
    pub fn new(users: Arc<U>, clubs: Arc<C>) -> Self {
        Self { users, clubs }
    }

    /// Attempt to join a user to a club
    ///
    /// Every anticipated failure mode comes back as a `JoinResult`
    /// variant; `Err` is reserved for storage trouble.
    pub async fn join(&self, club_id: &str, user_id: &str) -> Result<JoinResult, DomainError> {
        let club_id = ClubId::new(club_id).map_err(|e| DomainError::invalid_id(e.to_string()))?;
        let user_id = UserId::new(user_id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        debug!(club_id = %club_id, user_id = %user_id, "Processing join request");

        // Neither lookup depends on the other.
        let (club, user) = tokio::join!(self.clubs.get(&club_id), self.users.get(&user_id));
        let club = club?;
        let user = user?;

        let result = match decide(club.as_ref(), user.as_ref()) {
            JoinDecision::NotFound => JoinResult::NotFound,
            JoinDecision::AlreadyJoined => JoinResult::AlreadyJoined,
            JoinDecision::AgeNotAllowed => JoinResult::AgeNotAllowed,
            JoinDecision::Eligible => match self.users.assign_club(&user_id, &club_id).await {
                Ok(_) => JoinResult::Success,
                // The write found the user no longer unaffiliated: a
                // concurrent join won. A concurrent delete surfaces as
                // the repository's not-found instead.
                Err(DomainError::PreconditionFailed { .. }) => JoinResult::AlreadyJoined,
                Err(DomainError::NotFound { .. }) => JoinResult::NotFound,
                Err(e) => return Err(e),
            },
        };

        record_join_attempt(result.as_str());

        match result {
            JoinResult::Success => {
                info!(club_id = %club_id, user_id = %user_id, "User joined club");
            }
            outcome => {
                debug!(
                    club_id = %club_id,
                    user_id = %user_id,
                    outcome = %outcome,
                    "Join request rejected"
                );
            }
        }

        Ok(result)
    }

    /// Remove a user from whatever club they belong to
    ///
    /// Returns `Ok(None)` when the user does not exist. Leaving while
    /// unaffiliated is a no-op that still succeeds.
    pub async fn leave(&self, user_id: &str) -> Result<Option<User>, DomainError> {
        let user_id = UserId::new(user_id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        debug!(user_id = %user_id, "Processing leave request");

        let Some(mut user) = self.users.get(&user_id).await? else {
            record_leave(false);
            return Ok(None);
        };

        user.leave_club();
        let user = self.users.save(user).await?;

        record_leave(true);
        info!(user_id = %user_id, "User left club");

        Ok(Some(user))
    }
}
