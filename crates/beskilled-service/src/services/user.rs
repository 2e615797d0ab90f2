//! User service
//!
//! Handles profile operations, user search, and public profiles.

use std::collections::HashMap;

use beskilled_core::entities::SkillKind;
use beskilled_core::traits::UserSearchQuery;
use beskilled_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{
    CurrentUserResponse, PublicUserProfileResponse, SearchUserResponse, UpdateProfileRequest,
    UserSearchParams,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Search results are capped the same way the browse page pages them
const SEARCH_LIMIT: i64 = 20;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get current authenticated user (full profile)
    #[instrument(skip(self))]
    pub async fn get_current_user(&self, user_id: Snowflake) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(CurrentUserResponse::from(&user))
    }

    /// Update the current user's profile (full overwrite of the editable fields)
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: Snowflake,
        request: UpdateProfileRequest,
    ) -> ServiceResult<CurrentUserResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        user.set_profile(request.name, request.location, request.availability);
        self.ctx.user_repo().update_profile(&user).await?;

        info!(user_id = %user_id, "User profile updated");

        Ok(CurrentUserResponse::from(&user))
    }

    /// Search other users by name, location, and skill
    ///
    /// Never returns the searching user, admins, or banned accounts.
    /// Each result carries the user's skill names.
    #[instrument(skip(self, params))]
    pub async fn search(
        &self,
        viewer_id: Snowflake,
        params: UserSearchParams,
    ) -> ServiceResult<Vec<SearchUserResponse>> {
        let query = UserSearchQuery {
            viewer_id,
            name: params.name,
            location: params.location,
            skill: params.skill,
        };

        let users = self.ctx.user_repo().search(&query, SEARCH_LIMIT).await?;

        let user_ids: Vec<Snowflake> = users.iter().map(|u| u.id).collect();
        let mut skills_by_user: HashMap<Snowflake, Vec<String>> = HashMap::new();
        for (user_id, name) in self.ctx.skill_repo().names_for_users(&user_ids).await? {
            skills_by_user.entry(user_id).or_default().push(name);
        }

        Ok(users
            .into_iter()
            .map(|user| SearchUserResponse {
                id: user.id.to_string(),
                name: user.name,
                location: user.location,
                profile_photo_url: user.profile_photo_url,
                availability: user.availability,
                skills: skills_by_user.remove(&user.id).unwrap_or_default(),
            })
            .collect())
    }

    /// Get the public profile of a non-admin user, including skill name lists
    #[instrument(skip(self))]
    pub async fn get_public_profile(
        &self,
        user_id: Snowflake,
    ) -> ServiceResult<PublicUserProfileResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .filter(|u| !u.is_admin())
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let skills = self.ctx.skill_repo().find_by_user(user_id).await?;

        let (skills_offered, skills_wanted): (Vec<_>, Vec<_>) = skills
            .into_iter()
            .partition(|skill| skill.kind == SkillKind::Offered);

        Ok(PublicUserProfileResponse {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            location: user.location,
            profile_photo_url: user.profile_photo_url,
            availability: user.availability,
            created_at: user.created_at,
            skills_offered: skills_offered.into_iter().map(|s| s.name).collect(),
            skills_wanted: skills_wanted.into_iter().map(|s| s.name).collect(),
        })
    }
}
