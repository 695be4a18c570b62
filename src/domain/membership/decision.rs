//! Membership rule engine
//!
//! Pure decision logic for the join workflow: given the fetched club
//! and user records, decide whether a join may proceed. No I/O happens
//! here; the coordinator owns fetching and persisting.

use crate::domain::club::Club;
use crate::domain::user::User;

/// Verdict of the join rule engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinDecision {
    /// Club or user (or both) does not exist
    NotFound,
    /// The user already belongs to a club
    AlreadyJoined,
    /// The user is younger than the club's minimum joining age
    AgeNotAllowed,
    /// The join may proceed; the coordinator assigns the membership
    Eligible,
}

/// Outcome of a coordinated join, as reported to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinResult {
    Success,
    NotFound,
    AlreadyJoined,
    AgeNotAllowed,
}

impl JoinResult {
    /// Stable lowercase label, used for logging and metrics
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::NotFound => "not_found",
            Self::AlreadyJoined => "already_joined",
            Self::AgeNotAllowed => "age_not_allowed",
        }
    }
}

impl std::fmt::Display for JoinResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide whether a user may join a club.
///
/// The checks run in a fixed order and the first match wins:
/// 1. either record absent -> `NotFound`
/// 2. user already affiliated -> `AlreadyJoined`
/// 3. user younger than the club minimum -> `AgeNotAllowed`
/// 4. otherwise -> `Eligible`
///
/// Existence is checked before membership state, which is checked
/// before the age rule, so a missing record never produces a
/// misleading "already joined" or "age" verdict. The age comparison is
/// inclusive: a user exactly at the minimum age is eligible.
pub fn decide(club: Option<&Club>, user: Option<&User>) -> JoinDecision {
    let (club, user) = match (club, user) {
        (Some(club), Some(user)) => (club, user),
        _ => return JoinDecision::NotFound,
    };

    if user.is_affiliated() {
        return JoinDecision::AlreadyJoined;
    }

    if !club.admits_age(user.age()) {
        return JoinDecision::AgeNotAllowed;
    }

    JoinDecision::Eligible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::club::ClubId;
    use crate::domain::user::UserId;

    fn club_with_min_age(min_age: u32) -> Club {
        Club::new(ClubId::generate(), "chess club", min_age)
    }

    fn user_with_age(age: u32) -> User {
        User::new(UserId::generate(), "alice", age)
    }

    fn affiliated_user(age: u32) -> User {
        let mut user = user_with_age(age);
        user.join_club(ClubId::generate());
        user
    }

    #[test]
    fn test_missing_club_is_not_found() {
        let user = user_with_age(20);
        assert_eq!(decide(None, Some(&user)), JoinDecision::NotFound);
    }

    #[test]
    fn test_missing_user_is_not_found() {
        let club = club_with_min_age(18);
        assert_eq!(decide(Some(&club), None), JoinDecision::NotFound);
    }

    #[test]
    fn test_both_missing_is_not_found() {
        assert_eq!(decide(None, None), JoinDecision::NotFound);
    }

    #[test]
    fn test_affiliated_user_is_already_joined() {
        let club = club_with_min_age(18);
        let user = affiliated_user(20);
        assert_eq!(decide(Some(&club), Some(&user)), JoinDecision::AlreadyJoined);
    }

    #[test]
    fn test_under_age_user_is_age_not_allowed() {
        let club = club_with_min_age(18);
        let user = user_with_age(10);
        assert_eq!(decide(Some(&club), Some(&user)), JoinDecision::AgeNotAllowed);
    }

    #[test]
    fn test_eligible_user() {
        let club = club_with_min_age(18);
        let user = user_with_age(20);
        assert_eq!(decide(Some(&club), Some(&user)), JoinDecision::Eligible);
    }

    #[test]
    fn test_age_boundary_is_inclusive() {
        let club = club_with_min_age(18);
        let at_minimum = user_with_age(18);
        let below_minimum = user_with_age(17);

        assert_eq!(decide(Some(&club), Some(&at_minimum)), JoinDecision::Eligible);
        assert_eq!(
            decide(Some(&club), Some(&below_minimum)),
            JoinDecision::AgeNotAllowed
        );
    }

    #[test]
    fn test_existence_outranks_membership_state() {
        // A missing club must not report the user's affiliation.
        let user = affiliated_user(20);
        assert_eq!(decide(None, Some(&user)), JoinDecision::NotFound);
    }

    #[test]
    fn test_membership_state_outranks_age_rule() {
        // An affiliated under-age user is reported as already joined,
        // not as an age violation.
        let club = club_with_min_age(18);
        let user = affiliated_user(10);
        assert_eq!(decide(Some(&club), Some(&user)), JoinDecision::AlreadyJoined);
    }

    #[test]
    fn test_join_result_labels() {
        assert_eq!(JoinResult::Success.as_str(), "success");
        assert_eq!(JoinResult::NotFound.as_str(), "not_found");
        assert_eq!(JoinResult::AlreadyJoined.as_str(), "already_joined");
        assert_eq!(JoinResult::AgeNotAllowed.as_str(), "age_not_allowed");
    }
}
