//! PostgreSQL implementation of ReportRepository
//!
//! Read-only aggregate queries backing the admin dashboard and CSV exports.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use beskilled_core::entities::{SkillKind, SwapStatus};
use beskilled_core::traits::{
    FeedbackLogRow, RepoResult, ReportRepository, ReportSummary, StatusCount, SwapStatsRow,
    UserActivityRow,
};

use crate::models::{FeedbackLogModel, SwapStatsModel, UserActivityModel};

use super::error::map_db_error;

/// PostgreSQL implementation of ReportRepository
#[derive(Clone)]
pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    /// Create a new PgReportRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    #[instrument(skip(self))]
    async fn summary(&self) -> RepoResult<ReportSummary> {
        let total_users = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM users WHERE is_banned = FALSE
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let swap_rows = sqlx::query_as::<_, (String, i64)>(
            r"
            SELECT status, COUNT(*) FROM swap_requests GROUP BY status
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let swaps_by_status = swap_rows
            .into_iter()
            .filter_map(|(status, total)| {
                SwapStatus::parse(&status).map(|status| StatusCount { status, total })
            })
            .collect();

        let (avg_rating, total_ratings) = sqlx::query_as::<_, (Option<f64>, i64)>(
            r"
            SELECT AVG(score)::FLOAT8, COUNT(*) FROM ratings
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let skill_rows = sqlx::query_as::<_, (String, i64)>(
            r"
            SELECT kind, COUNT(*) FROM skills WHERE is_approved = TRUE GROUP BY kind
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let skills_by_kind = skill_rows
            .into_iter()
            .filter_map(|(kind, total)| SkillKind::parse(&kind).map(|kind| (kind, total)))
            .collect();

        Ok(ReportSummary {
            total_users,
            swaps_by_status,
            avg_rating,
            total_ratings,
            skills_by_kind,
        })
    }

    #[instrument(skip(self))]
    async fn user_activity(&self) -> RepoResult<Vec<UserActivityRow>> {
        let rows = sqlx::query_as::<_, UserActivityModel>(
            r"
            SELECT u.id, u.name, u.email, u.location, u.created_at,
                   COUNT(DISTINCT sr1.id) AS swaps_sent,
                   COUNT(DISTINCT sr2.id) AS swaps_received,
                   COUNT(DISTINCT s.id) AS total_skills,
                   COUNT(DISTINCT r.id) AS ratings_given
            FROM users u
            LEFT JOIN swap_requests sr1 ON u.id = sr1.sender_id
            LEFT JOIN swap_requests sr2 ON u.id = sr2.receiver_id
            LEFT JOIN skills s ON u.id = s.user_id
            LEFT JOIN ratings r ON u.id = r.rated_by
            GROUP BY u.id, u.name, u.email, u.location, u.created_at
            ORDER BY u.created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(UserActivityRow::from).collect())
    }

    #[instrument(skip(self))]
    async fn feedback_logs(&self) -> RepoResult<Vec<FeedbackLogRow>> {
        let rows = sqlx::query_as::<_, FeedbackLogModel>(
            r"
            SELECT r.id, r.score, r.comment, r.created_at,
                   rater.name AS rater_name, rated.name AS rated_user_name,
                   sr.skill_offered, sr.skill_requested
            FROM ratings r
            JOIN users rater ON r.rated_by = rater.id
            JOIN users rated ON r.rated_user = rated.id
            JOIN swap_requests sr ON r.swap_id = sr.id
            ORDER BY r.created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(FeedbackLogRow::from).collect())
    }

    #[instrument(skip(self))]
    async fn swap_stats(&self) -> RepoResult<Vec<SwapStatsRow>> {
        let rows = sqlx::query_as::<_, SwapStatsModel>(
            r"
            SELECT sr.id, sr.skill_offered, sr.skill_requested, sr.status,
                   sr.created_at, sr.updated_at,
                   sender.name AS sender_name, receiver.name AS receiver_name,
                   sender.location AS sender_location, receiver.location AS receiver_location
            FROM swap_requests sr
            JOIN users sender ON sr.sender_id = sender.id
            JOIN users receiver ON sr.receiver_id = receiver.id
            ORDER BY sr.created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(SwapStatsRow::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgReportRepository>();
    }
}
