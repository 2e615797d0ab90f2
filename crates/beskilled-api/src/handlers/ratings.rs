//! Rating handlers
//!
//! Endpoints for post-swap feedback.

use axum::{
    extract::{Path, State},
    Json,
};
use beskilled_service::{
    CreateRatingRequest, RatingGivenResponse, RatingReceivedResponse, RatingResponse,
    RatingService,
};

use crate::extractors::{AuthUser, UserIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Ratings received by a user (public)
///
/// GET /api/ratings/user/{user_id}
pub async fn ratings_for_user(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<Vec<RatingReceivedResponse>>> {
    let user_id = path.user_id()?;

    let service = RatingService::new(state.service_context());
    let response = service.ratings_for_user(user_id).await?;
    Ok(Json(response))
}

/// Rate the counterpart of a swap
///
/// POST /api/ratings
pub async fn add_rating(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateRatingRequest>,
) -> ApiResult<Created<Json<RatingResponse>>> {
    let service = RatingService::new(state.service_context());
    let response = service.add_rating(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Ratings written by a user
///
/// GET /api/ratings/given/{user_id}
pub async fn ratings_given_by(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<Vec<RatingGivenResponse>>> {
    let user_id = path.user_id()?;

    let service = RatingService::new(state.service_context());
    let response = service.ratings_given_by(user_id).await?;
    Ok(Json(response))
}
