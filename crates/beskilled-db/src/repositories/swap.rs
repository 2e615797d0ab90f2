//! PostgreSQL implementation of SwapRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use beskilled_core::entities::{SwapRequest, SwapStatus};
use beskilled_core::traits::{RepoResult, SwapRepository, SwapWithParties};
use beskilled_core::value_objects::Snowflake;

use crate::models::{SwapModel, SwapWithPartiesModel};

use super::error::map_db_error;

/// PostgreSQL implementation of SwapRepository
#[derive(Clone)]
pub struct PgSwapRepository {
    pool: PgPool,
}

impl PgSwapRepository {
    /// Create a new PgSwapRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SwapRepository for PgSwapRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<SwapRequest>> {
        let result = sqlx::query_as::<_, SwapModel>(
            r"
            SELECT id, sender_id, receiver_id, skill_offered, skill_requested,
                   message, status, created_at, updated_at
            FROM swap_requests
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(SwapRequest::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<SwapWithParties>> {
        let rows = sqlx::query_as::<_, SwapWithPartiesModel>(
            r"
            SELECT sr.id, sr.sender_id, sr.receiver_id, sr.skill_offered, sr.skill_requested,
                   sr.message, sr.status, sr.created_at, sr.updated_at,
                   sender.name AS sender_name, sender.profile_photo_url AS sender_photo,
                   receiver.name AS receiver_name, receiver.profile_photo_url AS receiver_photo
            FROM swap_requests sr
            JOIN users sender ON sr.sender_id = sender.id AND sender.role != 'admin'
            JOIN users receiver ON sr.receiver_id = receiver.id AND receiver.role != 'admin'
            WHERE sr.sender_id = $1 OR sr.receiver_id = $1
            ORDER BY sr.created_at DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(SwapWithParties::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<SwapWithParties>> {
        let rows = sqlx::query_as::<_, SwapWithPartiesModel>(
            r"
            SELECT sr.id, sr.sender_id, sr.receiver_id, sr.skill_offered, sr.skill_requested,
                   sr.message, sr.status, sr.created_at, sr.updated_at,
                   sender.name AS sender_name, sender.profile_photo_url AS sender_photo,
                   receiver.name AS receiver_name, receiver.profile_photo_url AS receiver_photo
            FROM swap_requests sr
            JOIN users sender ON sr.sender_id = sender.id
            JOIN users receiver ON sr.receiver_id = receiver.id
            ORDER BY sr.created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(SwapWithParties::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, swap: &SwapRequest) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO swap_requests (id, sender_id, receiver_id, skill_offered,
                                       skill_requested, message, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(swap.id.into_inner())
        .bind(swap.sender_id.into_inner())
        .bind(swap.receiver_id.into_inner())
        .bind(&swap.skill_offered)
        .bind(&swap.skill_requested)
        .bind(&swap.message)
        .bind(swap.status.as_str())
        .bind(swap.created_at)
        .bind(swap.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_status(
        &self,
        id: Snowflake,
        receiver_id: Snowflake,
        status: SwapStatus,
    ) -> RepoResult<Option<SwapRequest>> {
        let result = sqlx::query_as::<_, SwapModel>(
            r"
            UPDATE swap_requests
            SET status = $3, updated_at = NOW()
            WHERE id = $1 AND receiver_id = $2
            RETURNING id, sender_id, receiver_id, skill_offered, skill_requested,
                      message, status, created_at, updated_at
            ",
        )
        .bind(id.into_inner())
        .bind(receiver_id.into_inner())
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(SwapRequest::from))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake, user_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM swap_requests
            WHERE id = $1 AND (sender_id = $2 OR receiver_id = $2)
            ",
        )
        .bind(id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
