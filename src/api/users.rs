//! User management endpoints

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::clubs::ClubResponse;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::User;
use crate::infrastructure::services::{CreateUserRequest, UpdateUserRequest};

/// Request to create a new user
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserApiRequest {
    pub name: String,
    pub age: u32,
}

/// Request to update a user's profile
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserApiRequest {
    pub id: String,
    pub name: String,
    pub age: u32,
}

/// User response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club_id: Option<String>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().as_str().to_string(),
            name: user.name().to_string(),
            age: user.age(),
            created_at: user.created_at().to_rfc3339(),
            club_id: user.club_id().map(|c| c.as_str().to_string()),
        }
    }
}

/// List users response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListUsersResponse {
    pub users: Vec<UserResponse>,
    pub total: usize,
}

/// POST /api/user
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserApiRequest>,
) -> Result<impl IntoResponse, ApiError> {
    debug!(name = %request.name, age = request.age, "Creating user");

    let user = state
        .user_service
        .create(CreateUserRequest {
            name: request.name,
            age: request.age,
        })
        .await
        .map_err(ApiError::from)?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, "/api/user")],
        Json(UserResponse::from(&user)),
    ))
}

/// PUT /api/user
pub async fn update_user(
    State(state): State<AppState>,
    Json(request): Json<UpdateUserApiRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = %request.id, "Updating user");

    let user = state
        .user_service
        .update(UpdateUserRequest {
            id: request.id,
            name: request.name,
            age: request.age,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Json(UserResponse::from(&user)))
}

/// GET /api/user/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = %user_id, "Getting user");

    let user = state
        .user_service
        .get(&user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(format!("User '{}' not found", user_id)))?;

    Ok(Json(UserResponse::from(&user)))
}

/// GET /api/user/list
pub async fn list_users(State(state): State<AppState>) -> Result<Json<ListUsersResponse>, ApiError> {
    list_users_at(state, 0).await
}

/// GET /api/user/list/{page}
pub async fn list_users_page(
    State(state): State<AppState>,
    Path(page): Path<u32>,
) -> Result<Json<ListUsersResponse>, ApiError> {
    list_users_at(state, page).await
}

async fn list_users_at(state: AppState, page: u32) -> Result<Json<ListUsersResponse>, ApiError> {
    debug!(page, "Listing users");

    let users = state.user_service.list(page).await.map_err(ApiError::from)?;

    let user_responses: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
    let total = user_responses.len();

    Ok(Json(ListUsersResponse {
        users: user_responses,
        total,
    }))
}

/// DELETE /api/user/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    debug!(user_id = %user_id, "Deleting user");

    let deleted = state
        .user_service
        .delete(&user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(serde_json::json!({
        "deleted": deleted,
        "id": user_id
    })))
}

/// GET /api/user/club/{user_id}
pub async fn get_user_club(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ClubResponse>, ApiError> {
    debug!(user_id = %user_id, "Getting user's club");

    let club = state
        .user_service
        .club_of(&user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(format!("No club for user '{}'", user_id)))?;

    Ok(Json(ClubResponse::from(&club)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::club::ClubId;
    use crate::domain::user::UserId;

    #[test]
    fn test_create_user_request_deserialization() {
        let json = r#"{
            "name": "alice",
            "age": 20
        }"#;

        let request: CreateUserApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "alice");
        assert_eq!(request.age, 20);
    }

    #[test]
    fn test_create_user_request_rejects_negative_age() {
        let json = r#"{"name": "alice", "age": -3}"#;

        let result = serde_json::from_str::<CreateUserApiRequest>(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_user_request_deserialization() {
        let json = r#"{
            "id": "user-1",
            "name": "alicia",
            "age": 21
        }"#;

        let request: UpdateUserApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.id, "user-1");
        assert_eq!(request.name, "alicia");
        assert_eq!(request.age, 21);
    }

    #[test]
    fn test_user_response_uses_camel_case() {
        let mut user = User::new(UserId::generate(), "alice", 20);
        user.join_club(ClubId::generate());

        let response = UserResponse::from(&user);
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"clubId\""));
    }

    #[test]
    fn test_user_response_omits_missing_club() {
        let user = User::new(UserId::generate(), "alice", 20);

        let response = UserResponse::from(&user);
        let json = serde_json::to_string(&response).unwrap();

        assert!(!json.contains("clubId"));
    }
}
