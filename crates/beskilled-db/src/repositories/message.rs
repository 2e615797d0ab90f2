//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use beskilled_core::entities::Message;
use beskilled_core::traits::{MessageRepository, MessageWithSender, RepoResult};
use beskilled_core::value_objects::Snowflake;

use crate::models::MessageWithSenderModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn find_by_swap(&self, swap_id: Snowflake) -> RepoResult<Vec<MessageWithSender>> {
        let rows = sqlx::query_as::<_, MessageWithSenderModel>(
            r"
            SELECT m.id, m.swap_id, m.sender_id, m.receiver_id, m.body, m.is_read, m.created_at,
                   u.name AS sender_name, u.profile_photo_url AS sender_photo
            FROM messages m
            JOIN users u ON m.sender_id = u.id
            WHERE m.swap_id = $1
            ORDER BY m.created_at ASC
            ",
        )
        .bind(swap_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(MessageWithSender::from).collect())
    }

    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn create(&self, message: &Message) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO messages (id, swap_id, sender_id, receiver_id, body, is_read, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(message.id.into_inner())
        .bind(message.swap_id.into_inner())
        .bind(message.sender_id.into_inner())
        .bind(message.receiver_id.into_inner())
        .bind(&message.body)
        .bind(message.is_read)
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn mark_read(&self, swap_id: Snowflake, receiver_id: Snowflake) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE messages
            SET is_read = TRUE
            WHERE swap_id = $1 AND receiver_id = $2 AND is_read = FALSE
            ",
        )
        .bind(swap_id.into_inner())
        .bind(receiver_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
