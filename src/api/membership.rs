//! Membership endpoints - club join and leave

use axum::extract::State;
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::api::users::UserResponse;
use crate::domain::JoinResult;

/// Request to join a club
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinClubApiRequest {
    pub club_id: String,
    pub user_id: String,
}

/// Request to leave a club
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveClubApiRequest {
    pub user_id: String,
}

/// POST /api/club/join
pub async fn join_club(
    State(state): State<AppState>,
    Json(request): Json<JoinClubApiRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    debug!(club_id = %request.club_id, user_id = %request.user_id, "Join request");

    let result = state
        .membership_service
        .join(&request.club_id, &request.user_id)
        .await
        .map_err(ApiError::from)?;

    match result {
        JoinResult::Success => Ok(Json(serde_json::json!({
            "result": result.as_str()
        }))),
        JoinResult::NotFound => Err(ApiError::not_found("Club or user not found")),
        JoinResult::AlreadyJoined => Err(ApiError::not_acceptable(
            "User already belongs to a club",
        )
        .with_code(result.as_str())),
        JoinResult::AgeNotAllowed => Err(ApiError::not_acceptable(
            "User does not meet the club's minimum age",
        )
        .with_code(result.as_str())),
    }
}

/// POST /api/club/leave
pub async fn leave_club(
    State(state): State<AppState>,
    Json(request): Json<LeaveClubApiRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = %request.user_id, "Leave request");

    let user = state
        .membership_service
        .leave(&request.user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(format!("User '{}' not found", request.user_id)))?;

    Ok(Json(UserResponse::from(&user)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_request_deserialization() {
        let json = r#"{
            "clubId": "club-1",
            "userId": "user-1"
        }"#;

        let request: JoinClubApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.club_id, "club-1");
        assert_eq!(request.user_id, "user-1");
    }

    #[test]
    fn test_join_request_requires_both_ids() {
        let json = r#"{"clubId": "club-1"}"#;

        let result = serde_json::from_str::<JoinClubApiRequest>(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_leave_request_deserialization() {
        let json = r#"{"userId": "user-1"}"#;

        let request: LeaveClubApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.user_id, "user-1");
    }
}
