//! Admin handlers
//!
//! Moderation endpoints and report exports. All of them verify the
//! caller's stored admin role inside the service layer.

use axum::{
    extract::{Path, State},
    Json,
};
use beskilled_service::{
    AdminService, BanUserRequest, BanUserResponse, CreatePlatformMessageRequest,
    ModerateSkillRequest, PlatformMessageResponse, ReportService, ReportSummaryResponse,
    SkillResponse, SwapDetailResponse, UserAdminResponse,
};

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, CsvAttachment};
use crate::state::AppState;

/// List all users
///
/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<UserAdminResponse>>> {
    let service = AdminService::new(state.service_context());
    let response = service.list_users(auth.user_id).await?;
    Ok(Json(response))
}

/// Ban or unban a user
///
/// PUT /api/admin/users/{id}/ban
pub async fn ban_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
    Json(request): Json<BanUserRequest>,
) -> ApiResult<Json<BanUserResponse>> {
    let user_id = path.id()?;

    let service = AdminService::new(state.service_context());
    let response = service.set_user_banned(auth.user_id, user_id, request).await?;
    Ok(Json(response))
}

/// List all swaps
///
/// GET /api/admin/swaps
pub async fn list_swaps(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<SwapDetailResponse>>> {
    let service = AdminService::new(state.service_context());
    let response = service.list_swaps(auth.user_id).await?;
    Ok(Json(response))
}

/// Approve or reject a skill
///
/// PUT /api/admin/skills/{id}
pub async fn moderate_skill(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
    Json(request): Json<ModerateSkillRequest>,
) -> ApiResult<Json<SkillResponse>> {
    let skill_id = path.id()?;

    let service = AdminService::new(state.service_context());
    let response = service.moderate_skill(auth.user_id, skill_id, request).await?;
    Ok(Json(response))
}

/// Broadcast a platform announcement
///
/// POST /api/admin/messages
pub async fn send_platform_message(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePlatformMessageRequest>,
) -> ApiResult<Created<Json<PlatformMessageResponse>>> {
    let service = AdminService::new(state.service_context());
    let response = service.send_platform_message(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Platform-wide summary counts
///
/// GET /api/admin/reports
pub async fn reports_summary(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ReportSummaryResponse>> {
    let service = ReportService::new(state.service_context());
    let response = service.summary(auth.user_id).await?;
    Ok(Json(response))
}

/// User activity report as CSV
///
/// GET /api/admin/reports/user-activity
pub async fn user_activity_report(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<CsvAttachment> {
    let service = ReportService::new(state.service_context());
    let report = service.user_activity_csv(auth.user_id).await?;
    Ok(CsvAttachment(report))
}

/// Feedback logs report as CSV
///
/// GET /api/admin/reports/feedback-logs
pub async fn feedback_logs_report(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<CsvAttachment> {
    let service = ReportService::new(state.service_context());
    let report = service.feedback_logs_csv(auth.user_id).await?;
    Ok(CsvAttachment(report))
}

/// Swap statistics report as CSV
///
/// GET /api/admin/reports/swap-stats
pub async fn swap_stats_report(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<CsvAttachment> {
    let service = ReportService::new(state.service_context());
    let report = service.swap_stats_csv(auth.user_id).await?;
    Ok(CsvAttachment(report))
}
