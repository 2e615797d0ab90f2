//! Skill service
//!
//! Handles a user's own skill list.

use beskilled_core::entities::{Skill, SkillKind};
use beskilled_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CreateSkillRequest, SkillResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Skill service
pub struct SkillService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SkillService<'a> {
    /// Create a new SkillService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the caller's skills, ordered by kind then name
    #[instrument(skip(self))]
    pub async fn list_skills(&self, user_id: Snowflake) -> ServiceResult<Vec<SkillResponse>> {
        let skills = self.ctx.skill_repo().find_by_user(user_id).await?;
        Ok(skills.iter().map(SkillResponse::from).collect())
    }

    /// Add a skill to the caller's list
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn add_skill(
        &self,
        user_id: Snowflake,
        request: CreateSkillRequest,
    ) -> ServiceResult<SkillResponse> {
        let kind = SkillKind::parse(&request.kind)
            .ok_or_else(|| ServiceError::Domain(DomainError::InvalidSkillKind(request.kind.clone())))?;

        let skill = Skill::new(self.ctx.generate_id(), user_id, request.name, kind);
        self.ctx.skill_repo().create(&skill).await?;

        info!(skill_id = %skill.id, user_id = %user_id, "Skill added");

        Ok(SkillResponse::from(&skill))
    }

    /// Delete one of the caller's skills
    #[instrument(skip(self))]
    pub async fn delete_skill(&self, user_id: Snowflake, skill_id: Snowflake) -> ServiceResult<()> {
        let deleted = self.ctx.skill_repo().delete(skill_id, user_id).await?;
        if !deleted {
            return Err(ServiceError::not_found("Skill", skill_id.to_string()));
        }

        info!(skill_id = %skill_id, user_id = %user_id, "Skill deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // End-to-end coverage lives in the integration-tests crate.
}
