//! Club management endpoints

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::api::users::UserResponse;
use crate::domain::Club;
use crate::infrastructure::services::{CreateClubRequest, UpdateClubRequest};

/// Request to create a new club
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClubApiRequest {
    pub name: String,
    pub min_age_for_join: u32,
}

/// Request to update a club
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClubApiRequest {
    pub id: String,
    pub name: String,
    pub min_age_for_join: u32,
}

/// Club response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubResponse {
    pub id: String,
    pub name: String,
    pub min_age_for_join: u32,
    pub created_at: String,
}

impl From<&Club> for ClubResponse {
    fn from(club: &Club) -> Self {
        Self {
            id: club.id().as_str().to_string(),
            name: club.name().to_string(),
            min_age_for_join: club.min_age_for_join(),
            created_at: club.created_at().to_rfc3339(),
        }
    }
}

/// List clubs response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListClubsResponse {
    pub clubs: Vec<ClubResponse>,
    pub total: usize,
}

/// Club members response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubMembersResponse {
    pub members: Vec<UserResponse>,
    pub total: usize,
}

/// POST /api/club
pub async fn create_club(
    State(state): State<AppState>,
    Json(request): Json<CreateClubApiRequest>,
) -> Result<impl IntoResponse, ApiError> {
    debug!(name = %request.name, min_age = request.min_age_for_join, "Creating club");

    let club = state
        .club_service
        .create(CreateClubRequest {
            name: request.name,
            min_age_for_join: request.min_age_for_join,
        })
        .await
        .map_err(ApiError::from)?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, "/api/club")],
        Json(ClubResponse::from(&club)),
    ))
}

/// PUT /api/club
pub async fn update_club(
    State(state): State<AppState>,
    Json(request): Json<UpdateClubApiRequest>,
) -> Result<Json<ClubResponse>, ApiError> {
    debug!(club_id = %request.id, "Updating club");

    let club = state
        .club_service
        .update(UpdateClubRequest {
            id: request.id,
            name: request.name,
            min_age_for_join: request.min_age_for_join,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ClubResponse::from(&club)))
}

/// GET /api/club/{club_id}
pub async fn get_club(
    State(state): State<AppState>,
    Path(club_id): Path<String>,
) -> Result<Json<ClubResponse>, ApiError> {
    debug!(club_id = %club_id, "Getting club");

    let club = state
        .club_service
        .get(&club_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(format!("Club '{}' not found", club_id)))?;

    Ok(Json(ClubResponse::from(&club)))
}

/// GET /api/club/list
pub async fn list_clubs(State(state): State<AppState>) -> Result<Json<ListClubsResponse>, ApiError> {
    list_clubs_at(state, 0).await
}

/// GET /api/club/list/{page}
pub async fn list_clubs_page(
    State(state): State<AppState>,
    Path(page): Path<u32>,
) -> Result<Json<ListClubsResponse>, ApiError> {
    list_clubs_at(state, page).await
}

async fn list_clubs_at(state: AppState, page: u32) -> Result<Json<ListClubsResponse>, ApiError> {
    debug!(page, "Listing clubs");

    let clubs = state.club_service.list(page).await.map_err(ApiError::from)?;

    let club_responses: Vec<ClubResponse> = clubs.iter().map(ClubResponse::from).collect();
    let total = club_responses.len();

    Ok(Json(ListClubsResponse {
        clubs: club_responses,
        total,
    }))
}

/// DELETE /api/club/{club_id}
pub async fn delete_club(
    State(state): State<AppState>,
    Path(club_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    debug!(club_id = %club_id, "Deleting club");

    let deleted = state
        .club_service
        .delete(&club_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(serde_json::json!({
        "deleted": deleted,
        "id": club_id
    })))
}

/// GET /api/club/members/{club_id}
pub async fn get_club_members(
    State(state): State<AppState>,
    Path(club_id): Path<String>,
) -> Result<Json<ClubMembersResponse>, ApiError> {
    debug!(club_id = %club_id, "Listing club members");

    let members = state
        .club_service
        .members(&club_id)
        .await
        .map_err(ApiError::from)?;

    let member_responses: Vec<UserResponse> = members.iter().map(UserResponse::from).collect();
    let total = member_responses.len();

    Ok(Json(ClubMembersResponse {
        members: member_responses,
        total,
    }))
}
