//! Swap handlers
//!
//! Endpoints for the swap request lifecycle.

use axum::{
    extract::{Path, State},
    Json,
};
use beskilled_service::{
    CreateSwapRequest, SwapDetailResponse, SwapResponse, SwapService, UpdateSwapStatusRequest,
};

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List the caller's swaps (sent and received)
///
/// GET /api/swaps
pub async fn list_swaps(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<SwapDetailResponse>>> {
    let service = SwapService::new(state.service_context());
    let response = service.list_swaps(auth.user_id).await?;
    Ok(Json(response))
}

/// Send a swap request
///
/// POST /api/swaps
pub async fn create_swap(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateSwapRequest>,
) -> ApiResult<Created<Json<SwapResponse>>> {
    let service = SwapService::new(state.service_context());
    let response = service.create_swap(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Accept or reject a swap request (receiver only)
///
/// PUT /api/swaps/{id}
pub async fn update_swap_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
    Json(request): Json<UpdateSwapStatusRequest>,
) -> ApiResult<Json<SwapResponse>> {
    let swap_id = path.id()?;

    let service = SwapService::new(state.service_context());
    let response = service.update_status(auth.user_id, swap_id, request).await?;
    Ok(Json(response))
}

/// Delete a swap request (either party)
///
/// DELETE /api/swaps/{id}
pub async fn delete_swap(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
) -> ApiResult<NoContent> {
    let swap_id = path.id()?;

    let service = SwapService::new(state.service_context());
    service.delete_swap(auth.user_id, swap_id).await?;
    Ok(NoContent)
}
