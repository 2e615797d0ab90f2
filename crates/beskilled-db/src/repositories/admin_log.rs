//! PostgreSQL implementation of AdminLogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use beskilled_core::entities::AdminLog;
use beskilled_core::traits::{AdminLogRepository, RepoResult};
use beskilled_core::value_objects::Snowflake;

use super::error::map_db_error;

/// PostgreSQL implementation of AdminLogRepository
#[derive(Clone)]
pub struct PgAdminLogRepository {
    pool: PgPool,
}

impl PgAdminLogRepository {
    /// Create a new PgAdminLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminLogRepository for PgAdminLogRepository {
    #[instrument(skip(self, log), fields(action = %log.action))]
    async fn create(&self, log: &AdminLog) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO admin_logs (id, admin_id, action, target_type, target_id, details, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(log.id.into_inner())
        .bind(log.admin_id.into_inner())
        .bind(&log.action)
        .bind(&log.target_type)
        .bind(log.target_id.map(Snowflake::into_inner))
        .bind(&log.details)
        .bind(log.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
