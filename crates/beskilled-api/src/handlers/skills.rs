//! Skill handlers
//!
//! Endpoints for managing the caller's skill list.

use axum::{
    extract::{Path, State},
    Json,
};
use beskilled_service::{CreateSkillRequest, SkillResponse, SkillService};

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List the caller's skills
///
/// GET /api/skills
pub async fn list_skills(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<SkillResponse>>> {
    let service = SkillService::new(state.service_context());
    let response = service.list_skills(auth.user_id).await?;
    Ok(Json(response))
}

/// Add a skill
///
/// POST /api/skills
pub async fn add_skill(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateSkillRequest>,
) -> ApiResult<Created<Json<SkillResponse>>> {
    let service = SkillService::new(state.service_context());
    let response = service.add_skill(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Delete a skill
///
/// DELETE /api/skills/{id}
pub async fn delete_skill(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<IdPath>,
) -> ApiResult<NoContent> {
    let skill_id = path.id()?;

    let service = SkillService::new(state.service_context());
    service.delete_skill(auth.user_id, skill_id).await?;
    Ok(NoContent)
}
