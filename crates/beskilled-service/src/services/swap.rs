//! Swap service
//!
//! Handles the swap request lifecycle: create, list, status updates, delete.

use beskilled_core::entities::{SwapRequest, SwapStatus};
use beskilled_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CreateSwapRequest, SwapDetailResponse, SwapResponse, UpdateSwapStatusRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Swap service
pub struct SwapService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SwapService<'a> {
    /// Create a new SwapService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the caller's swaps (sent and received), newest first
    #[instrument(skip(self))]
    pub async fn list_swaps(&self, user_id: Snowflake) -> ServiceResult<Vec<SwapDetailResponse>> {
        let swaps = self.ctx.swap_repo().find_by_user(user_id).await?;
        Ok(swaps.into_iter().map(SwapDetailResponse::from).collect())
    }

    /// Send a swap request to another user
    #[instrument(skip(self, request), fields(receiver_id = %request.receiver_id))]
    pub async fn create_swap(
        &self,
        sender_id: Snowflake,
        request: CreateSwapRequest,
    ) -> ServiceResult<SwapResponse> {
        if request.receiver_id == sender_id {
            return Err(ServiceError::Domain(DomainError::CannotSwapWithSelf));
        }

        let receiver = self
            .ctx
            .user_repo()
            .find_by_id(request.receiver_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", request.receiver_id.to_string()))?;

        if receiver.is_admin() {
            return Err(ServiceError::Domain(DomainError::CannotSwapWithAdmin));
        }

        let swap = SwapRequest::new(
            self.ctx.generate_id(),
            sender_id,
            request.receiver_id,
            request.skill_offered,
            request.skill_requested,
            request.message,
        );

        self.ctx.swap_repo().create(&swap).await?;

        info!(swap_id = %swap.id, sender_id = %sender_id, "Swap request created");

        Ok(SwapResponse::from(&swap))
    }

    /// Accept or reject a swap request (receiver only)
    ///
    /// The swap is not found from the caller's point of view when it exists
    /// but belongs to a different receiver, mirroring the ownership filter
    /// in the update statement.
    #[instrument(skip(self, request))]
    pub async fn update_status(
        &self,
        user_id: Snowflake,
        swap_id: Snowflake,
        request: UpdateSwapStatusRequest,
    ) -> ServiceResult<SwapResponse> {
        let status = SwapStatus::parse(&request.status)
            .filter(|s| !matches!(s, SwapStatus::Pending))
            .ok_or_else(|| {
                ServiceError::Domain(DomainError::InvalidSwapStatus(request.status.clone()))
            })?;

        let updated = self
            .ctx
            .swap_repo()
            .update_status(swap_id, user_id, status)
            .await?
            .ok_or_else(|| ServiceError::not_found("Swap request", swap_id.to_string()))?;

        info!(swap_id = %swap_id, status = %status, "Swap status updated");

        Ok(SwapResponse::from(&updated))
    }

    /// Delete a swap request (either party)
    #[instrument(skip(self))]
    pub async fn delete_swap(&self, user_id: Snowflake, swap_id: Snowflake) -> ServiceResult<()> {
        let deleted = self.ctx.swap_repo().delete(swap_id, user_id).await?;
        if !deleted {
            return Err(ServiceError::not_found("Swap request", swap_id.to_string()));
        }

        info!(swap_id = %swap_id, user_id = %user_id, "Swap request deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // End-to-end coverage lives in the integration-tests crate.
}
