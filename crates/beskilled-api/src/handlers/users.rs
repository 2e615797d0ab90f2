//! User handlers
//!
//! Endpoints for profile management, user search, and public profiles.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use beskilled_service::{
    CurrentUserResponse, PublicUserProfileResponse, SearchUserResponse, UpdateProfileRequest,
    UserSearchParams, UserService,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Get current user's profile
///
/// GET /api/users/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_current_user(auth.user_id).await?;
    Ok(Json(response))
}

/// Update current user's profile
///
/// PUT /api/users/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_profile(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Search other users by name, location, and skill
///
/// GET /api/users/search
pub async fn search_users(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<UserSearchParams>,
) -> ApiResult<Json<Vec<SearchUserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.search(auth.user_id, params).await?;
    Ok(Json(response))
}

/// Get a user's public profile
///
/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<String>,
) -> ApiResult<Json<PublicUserProfileResponse>> {
    let user_id = user_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?;

    let service = UserService::new(state.service_context());
    let response = service.get_public_profile(user_id).await?;
    Ok(Json(response))
}
