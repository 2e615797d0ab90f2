//! PostgreSQL implementation of PlatformMessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use beskilled_core::entities::PlatformMessage;
use beskilled_core::traits::{PlatformMessageRepository, RepoResult};

use super::error::map_db_error;

/// PostgreSQL implementation of PlatformMessageRepository
#[derive(Clone)]
pub struct PgPlatformMessageRepository {
    pool: PgPool,
}

impl PgPlatformMessageRepository {
    /// Create a new PgPlatformMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlatformMessageRepository for PgPlatformMessageRepository {
    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn create(&self, message: &PlatformMessage) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO platform_messages (id, title, body, kind, created_by, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(message.id.into_inner())
        .bind(&message.title)
        .bind(&message.body)
        .bind(&message.kind)
        .bind(message.created_by.into_inner())
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
