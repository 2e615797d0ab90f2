//! Admin service
//!
//! Moderation operations. Every mutation writes an admin log entry.
//! The admin role is checked against the database, not the token, so a
//! demoted admin loses access as soon as the row changes.

use beskilled_core::entities::{AdminLog, PlatformMessage};
use beskilled_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    BanUserRequest, BanUserResponse, CreatePlatformMessageRequest, ModerateSkillRequest,
    PlatformMessageResponse, SkillResponse, SwapDetailResponse, UserAdminResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Admin service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Verify the caller's stored role is admin
    #[instrument(skip(self))]
    pub async fn require_admin(&self, user_id: Snowflake) -> ServiceResult<()> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::AdminRequired))?;

        if !user.is_admin() {
            return Err(ServiceError::Domain(DomainError::AdminRequired));
        }

        Ok(())
    }

    /// List all users, newest first
    #[instrument(skip(self))]
    pub async fn list_users(&self, admin_id: Snowflake) -> ServiceResult<Vec<UserAdminResponse>> {
        self.require_admin(admin_id).await?;

        let users = self.ctx.user_repo().list_all().await?;
        Ok(users.iter().map(UserAdminResponse::from).collect())
    }

    /// Ban or unban a user
    #[instrument(skip(self, request))]
    pub async fn set_user_banned(
        &self,
        admin_id: Snowflake,
        user_id: Snowflake,
        request: BanUserRequest,
    ) -> ServiceResult<BanUserResponse> {
        self.require_admin(admin_id).await?;

        let user = self
            .ctx
            .user_repo()
            .set_banned(user_id, request.is_banned)
            .await?;

        let action = if request.is_banned { "BAN_USER" } else { "UNBAN_USER" };
        self.log_action(
            admin_id,
            action,
            "user",
            Some(user_id),
            Some(format!("User {}", user.name)),
        )
        .await?;

        info!(user_id = %user_id, banned = request.is_banned, "User ban flag updated");

        Ok(BanUserResponse::from(&user))
    }

    /// List all swaps with party names, newest first
    #[instrument(skip(self))]
    pub async fn list_swaps(&self, admin_id: Snowflake) -> ServiceResult<Vec<SwapDetailResponse>> {
        self.require_admin(admin_id).await?;

        let swaps = self.ctx.swap_repo().list_all().await?;
        Ok(swaps.into_iter().map(SwapDetailResponse::from).collect())
    }

    /// Approve or reject a skill
    #[instrument(skip(self, request))]
    pub async fn moderate_skill(
        &self,
        admin_id: Snowflake,
        skill_id: Snowflake,
        request: ModerateSkillRequest,
    ) -> ServiceResult<SkillResponse> {
        self.require_admin(admin_id).await?;

        let (is_approved, action) = match request.action.as_str() {
            "approve" => (true, "APPROVE_SKILL"),
            "reject" => (false, "REJECT_SKILL"),
            other => {
                return Err(ServiceError::validation(format!(
                    "Unknown moderation action: {other}"
                )))
            }
        };

        let skill = self
            .ctx
            .skill_repo()
            .set_approved(skill_id, is_approved)
            .await?;

        self.log_action(
            admin_id,
            action,
            "skill",
            Some(skill_id),
            Some(format!("Skill: {}", skill.name)),
        )
        .await?;

        info!(skill_id = %skill_id, approved = is_approved, "Skill moderated");

        Ok(SkillResponse::from(&skill))
    }

    /// Broadcast a platform announcement
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn send_platform_message(
        &self,
        admin_id: Snowflake,
        request: CreatePlatformMessageRequest,
    ) -> ServiceResult<PlatformMessageResponse> {
        self.require_admin(admin_id).await?;

        let message = PlatformMessage::new(
            self.ctx.generate_id(),
            request.title,
            request.message,
            request.kind,
            admin_id,
        );

        self.ctx.platform_message_repo().create(&message).await?;

        self.log_action(
            admin_id,
            "SEND_MESSAGE",
            "platform_message",
            Some(message.id),
            Some(message.title.clone()),
        )
        .await?;

        info!(message_id = %message.id, "Platform message sent");

        Ok(PlatformMessageResponse::from(&message))
    }

    async fn log_action(
        &self,
        admin_id: Snowflake,
        action: &str,
        target_type: &str,
        target_id: Option<Snowflake>,
        details: Option<String>,
    ) -> ServiceResult<()> {
        let log = AdminLog::new(
            self.ctx.generate_id(),
            admin_id,
            action,
            target_type,
            target_id,
            details,
        );
        self.ctx.admin_log_repo().create(&log).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // End-to-end coverage lives in the integration-tests crate.
}
