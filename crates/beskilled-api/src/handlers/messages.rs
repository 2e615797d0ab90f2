//! Message handlers
//!
//! Endpoints for per-swap messaging.

use axum::{
    extract::{Path, State},
    Json,
};
use beskilled_service::{MarkReadResponse, MessageResponse, MessageService, SendMessageRequest};

use crate::extractors::{AuthUser, SwapIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List a swap's messages (participants only)
///
/// GET /api/messages/swap/{swap_id}
pub async fn list_messages(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<SwapIdPath>,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let swap_id = path.swap_id()?;

    let service = MessageService::new(state.service_context());
    let response = service.list_messages(auth.user_id, swap_id).await?;
    Ok(Json(response))
}

/// Send a message inside a swap (participants only)
///
/// POST /api/messages
pub async fn send_message(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<SendMessageRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let response = service.send_message(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Mark a swap's messages addressed to the caller as read
///
/// PUT /api/messages/read/{swap_id}
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<SwapIdPath>,
) -> ApiResult<Json<MarkReadResponse>> {
    let swap_id = path.swap_id()?;

    let service = MessageService::new(state.service_context());
    let response = service.mark_read(auth.user_id, swap_id).await?;
    Ok(Json(response))
}
