//! PostgreSQL implementation of RatingRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use beskilled_core::entities::Rating;
use beskilled_core::error::DomainError;
use beskilled_core::traits::{RatingRepository, RatingWithRated, RatingWithRater, RepoResult};
use beskilled_core::value_objects::Snowflake;

use crate::models::{RatingWithRatedModel, RatingWithRaterModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of RatingRepository
#[derive(Clone)]
pub struct PgRatingRepository {
    pool: PgPool,
}

impl PgRatingRepository {
    /// Create a new PgRatingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RatingRepository for PgRatingRepository {
    #[instrument(skip(self))]
    async fn find_for_user(&self, rated_user: Snowflake) -> RepoResult<Vec<RatingWithRater>> {
        let rows = sqlx::query_as::<_, RatingWithRaterModel>(
            r"
            SELECT r.id, r.swap_id, r.rated_by, r.rated_user, r.score, r.comment, r.created_at,
                   u.name AS rater_name
            FROM ratings r
            JOIN users u ON r.rated_by = u.id AND u.role != 'admin'
            WHERE r.rated_user = $1
            ORDER BY r.created_at DESC
            ",
        )
        .bind(rated_user.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(RatingWithRater::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_given_by(&self, rated_by: Snowflake) -> RepoResult<Vec<RatingWithRated>> {
        let rows = sqlx::query_as::<_, RatingWithRatedModel>(
            r"
            SELECT r.id, r.swap_id, r.rated_by, r.rated_user, r.score, r.comment, r.created_at,
                   u.name AS rated_user_name
            FROM ratings r
            JOIN users u ON r.rated_user = u.id
            WHERE r.rated_by = $1
            ORDER BY r.created_at DESC
            ",
        )
        .bind(rated_by.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(RatingWithRated::from).collect())
    }

    #[instrument(skip(self))]
    async fn exists(&self, swap_id: Snowflake, rated_by: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM ratings WHERE swap_id = $1 AND rated_by = $2)
            ",
        )
        .bind(swap_id.into_inner())
        .bind(rated_by.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, rating), fields(rating_id = %rating.id))]
    async fn create(&self, rating: &Rating) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO ratings (id, swap_id, rated_by, rated_user, score, comment, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(rating.id.into_inner())
        .bind(rating.swap_id.into_inner())
        .bind(rating.rated_by.into_inner())
        .bind(rating.rated_user.into_inner())
        .bind(rating.score)
        .bind(&rating.comment)
        .bind(rating.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::RatingAlreadyExists))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgRatingRepository>();
    }
}
