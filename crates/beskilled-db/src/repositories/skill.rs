//! PostgreSQL implementation of SkillRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use beskilled_core::entities::Skill;
use beskilled_core::traits::{RepoResult, SkillRepository};
use beskilled_core::value_objects::Snowflake;

use crate::models::SkillModel;

use super::error::{map_db_error, skill_not_found};

/// PostgreSQL implementation of SkillRepository
#[derive(Clone)]
pub struct PgSkillRepository {
    pool: PgPool,
}

impl PgSkillRepository {
    /// Create a new PgSkillRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SkillRepository for PgSkillRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Skill>> {
        let result = sqlx::query_as::<_, SkillModel>(
            r"
            SELECT id, user_id, name, kind, is_approved, created_at
            FROM skills
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Skill::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Skill>> {
        let rows = sqlx::query_as::<_, SkillModel>(
            r"
            SELECT id, user_id, name, kind, is_approved, created_at
            FROM skills
            WHERE user_id = $1
            ORDER BY kind, name
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Skill::from).collect())
    }

    #[instrument(skip(self))]
    async fn names_for_users(
        &self,
        user_ids: &[Snowflake],
    ) -> RepoResult<Vec<(Snowflake, String)>> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = user_ids.iter().map(|id| id.into_inner()).collect();

        let rows = sqlx::query_as::<_, (i64, String)>(
            r"
            SELECT user_id, name
            FROM skills
            WHERE user_id = ANY($1)
            ORDER BY user_id, name
            ",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(|(user_id, name)| (Snowflake::new(user_id), name))
            .collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, skill: &Skill) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO skills (id, user_id, name, kind, is_approved, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(skill.id.into_inner())
        .bind(skill.user_id.into_inner())
        .bind(&skill.name)
        .bind(skill.kind.as_str())
        .bind(skill.is_approved)
        .bind(skill.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake, owner_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM skills WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(id.into_inner())
        .bind(owner_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn set_approved(&self, id: Snowflake, is_approved: bool) -> RepoResult<Skill> {
        let result = sqlx::query_as::<_, SkillModel>(
            r"
            UPDATE skills
            SET is_approved = $2
            WHERE id = $1
            RETURNING id, user_id, name, kind, is_approved, created_at
            ",
        )
        .bind(id.into_inner())
        .bind(is_approved)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Skill::from).ok_or_else(|| skill_not_found(id))
    }
}
