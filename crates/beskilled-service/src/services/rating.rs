//! Rating service
//!
//! Handles post-swap feedback.

use beskilled_core::entities::Rating;
use beskilled_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    CreateRatingRequest, RatingGivenResponse, RatingReceivedResponse, RatingResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Rating service
pub struct RatingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RatingService<'a> {
    /// Create a new RatingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Ratings received by a user, newest first (public)
    #[instrument(skip(self))]
    pub async fn ratings_for_user(
        &self,
        user_id: Snowflake,
    ) -> ServiceResult<Vec<RatingReceivedResponse>> {
        let ratings = self.ctx.rating_repo().find_for_user(user_id).await?;
        Ok(ratings
            .into_iter()
            .map(RatingReceivedResponse::from)
            .collect())
    }

    /// Ratings written by a user, newest first
    #[instrument(skip(self))]
    pub async fn ratings_given_by(
        &self,
        user_id: Snowflake,
    ) -> ServiceResult<Vec<RatingGivenResponse>> {
        let ratings = self.ctx.rating_repo().find_given_by(user_id).await?;
        Ok(ratings.into_iter().map(RatingGivenResponse::from).collect())
    }

    /// Rate the counterpart of a swap
    ///
    /// The caller must be a swap participant and must rate the other party.
    /// A second rating for the same (swap, caller) pair is a conflict.
    #[instrument(skip(self, request), fields(swap_id = %request.swap_id))]
    pub async fn add_rating(
        &self,
        rater_id: Snowflake,
        request: CreateRatingRequest,
    ) -> ServiceResult<RatingResponse> {
        let swap = self
            .ctx
            .swap_repo()
            .find_by_id(request.swap_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Swap request", request.swap_id.to_string()))?;

        let counterpart = swap
            .counterpart_of(rater_id)
            .ok_or(ServiceError::Domain(DomainError::NotSwapParticipant))?;

        if request.rated_user != counterpart {
            return Err(ServiceError::validation(
                "Rated user must be the other party of the swap",
            ));
        }

        if self
            .ctx
            .rating_repo()
            .exists(request.swap_id, rater_id)
            .await?
        {
            return Err(ServiceError::Domain(DomainError::RatingAlreadyExists));
        }

        let rating = Rating::new(
            self.ctx.generate_id(),
            request.swap_id,
            rater_id,
            request.rated_user,
            request.score,
            request.comment,
        )?;

        self.ctx.rating_repo().create(&rating).await?;

        info!(rating_id = %rating.id, swap_id = %request.swap_id, "Rating added");

        Ok(RatingResponse::from(&rating))
    }
}

#[cfg(test)]
mod tests {
    // End-to-end coverage lives in the integration-tests crate.
}
