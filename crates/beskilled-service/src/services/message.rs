//! Message service
//!
//! Handles per-swap messaging between the two parties.

use beskilled_core::entities::Message;
use beskilled_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{MarkReadResponse, MessageResponse, SendMessageRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List a swap's messages, oldest first (participants only)
    #[instrument(skip(self))]
    pub async fn list_messages(
        &self,
        user_id: Snowflake,
        swap_id: Snowflake,
    ) -> ServiceResult<Vec<MessageResponse>> {
        self.require_participant(user_id, swap_id).await?;

        let messages = self.ctx.message_repo().find_by_swap(swap_id).await?;
        Ok(messages.into_iter().map(MessageResponse::from).collect())
    }

    /// Send a message inside a swap (participants only)
    ///
    /// The receiver is always the swap counterpart of the sender.
    #[instrument(skip(self, request), fields(swap_id = %request.swap_id))]
    pub async fn send_message(
        &self,
        sender_id: Snowflake,
        request: SendMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        let swap = self.require_participant(sender_id, request.swap_id).await?;

        // require_participant guarantees the sender is a party
        let receiver_id = swap
            .counterpart_of(sender_id)
            .ok_or(ServiceError::Domain(DomainError::NotSwapParticipant))?;

        let message = Message::new(
            self.ctx.generate_id(),
            request.swap_id,
            sender_id,
            receiver_id,
            request.message,
        );

        self.ctx.message_repo().create(&message).await?;

        info!(message_id = %message.id, swap_id = %request.swap_id, "Message sent");

        let sender = self
            .ctx
            .user_repo()
            .find_by_id(sender_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", sender_id.to_string()))?;

        Ok(MessageResponse {
            id: message.id.to_string(),
            swap_id: message.swap_id.to_string(),
            sender_id: message.sender_id.to_string(),
            receiver_id: message.receiver_id.to_string(),
            message: message.body,
            is_read: message.is_read,
            created_at: message.created_at,
            sender_name: sender.name,
            sender_photo: sender.profile_photo_url,
        })
    }

    /// Mark every message of the swap addressed to the caller as read
    #[instrument(skip(self))]
    pub async fn mark_read(
        &self,
        user_id: Snowflake,
        swap_id: Snowflake,
    ) -> ServiceResult<MarkReadResponse> {
        self.require_participant(user_id, swap_id).await?;

        let updated = self.ctx.message_repo().mark_read(swap_id, user_id).await?;
        Ok(MarkReadResponse { updated })
    }

    /// Load the swap and verify the user is one of its two parties
    async fn require_participant(
        &self,
        user_id: Snowflake,
        swap_id: Snowflake,
    ) -> ServiceResult<beskilled_core::entities::SwapRequest> {
        let swap = self
            .ctx
            .swap_repo()
            .find_by_id(swap_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::NotSwapParticipant))?;

        if !swap.involves(user_id) {
            return Err(ServiceError::Domain(DomainError::NotSwapParticipant));
        }

        Ok(swap)
    }
}

#[cfg(test)]
mod tests {
    // End-to-end coverage lives in the integration-tests crate.
}
