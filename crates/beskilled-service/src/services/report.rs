//! Report service
//!
//! Admin dashboard summary and CSV exports.

use chrono::{DateTime, Utc};
use tracing::instrument;

use beskilled_core::Snowflake;

use crate::dto::{CsvReport, ReportSummaryResponse};

use super::admin::AdminService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Report service
pub struct ReportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReportService<'a> {
    /// Create a new ReportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Platform-wide summary for the admin dashboard
    #[instrument(skip(self))]
    pub async fn summary(&self, admin_id: Snowflake) -> ServiceResult<ReportSummaryResponse> {
        AdminService::new(self.ctx).require_admin(admin_id).await?;

        let summary = self.ctx.report_repo().summary().await?;
        Ok(ReportSummaryResponse::from(summary))
    }

    /// Per-user activity counts as a CSV download
    #[instrument(skip(self))]
    pub async fn user_activity_csv(&self, admin_id: Snowflake) -> ServiceResult<CsvReport> {
        AdminService::new(self.ctx).require_admin(admin_id).await?;

        let rows = self.ctx.report_repo().user_activity().await?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record([
                "ID",
                "Name",
                "Email",
                "Location",
                "Joined Date",
                "Swaps Sent",
                "Swaps Received",
                "Total Skills",
                "Ratings Given",
            ])
            .map_err(csv_error)?;

        for row in rows {
            writer
                .write_record([
                    row.id.to_string(),
                    row.name,
                    row.email,
                    row.location.unwrap_or_default(),
                    format_date(row.created_at),
                    row.swaps_sent.to_string(),
                    row.swaps_received.to_string(),
                    row.total_skills.to_string(),
                    row.ratings_given.to_string(),
                ])
                .map_err(csv_error)?;
        }

        Ok(CsvReport {
            filename: "user-activity-report.csv",
            content: finish(writer)?,
        })
    }

    /// All ratings with context as a CSV download
    #[instrument(skip(self))]
    pub async fn feedback_logs_csv(&self, admin_id: Snowflake) -> ServiceResult<CsvReport> {
        AdminService::new(self.ctx).require_admin(admin_id).await?;

        let rows = self.ctx.report_repo().feedback_logs().await?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record([
                "Rating ID",
                "Score",
                "Comment",
                "Date",
                "Rater Name",
                "Rated User",
                "Skill Offered",
                "Skill Requested",
            ])
            .map_err(csv_error)?;

        for row in rows {
            writer
                .write_record([
                    row.id.to_string(),
                    row.score.to_string(),
                    row.comment.unwrap_or_default(),
                    format_date(row.created_at),
                    row.rater_name,
                    row.rated_user_name,
                    row.skill_offered,
                    row.skill_requested,
                ])
                .map_err(csv_error)?;
        }

        Ok(CsvReport {
            filename: "feedback-logs-report.csv",
            content: finish(writer)?,
        })
    }

    /// All swaps with party context as a CSV download
    #[instrument(skip(self))]
    pub async fn swap_stats_csv(&self, admin_id: Snowflake) -> ServiceResult<CsvReport> {
        AdminService::new(self.ctx).require_admin(admin_id).await?;

        let rows = self.ctx.report_repo().swap_stats().await?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record([
                "Swap ID",
                "Skill Offered",
                "Skill Requested",
                "Status",
                "Created Date",
                "Updated Date",
                "Sender Name",
                "Receiver Name",
                "Sender Location",
                "Receiver Location",
            ])
            .map_err(csv_error)?;

        for row in rows {
            writer
                .write_record([
                    row.id.to_string(),
                    row.skill_offered,
                    row.skill_requested,
                    row.status.as_str().to_string(),
                    format_date(row.created_at),
                    format_date(row.updated_at),
                    row.sender_name,
                    row.receiver_name,
                    row.sender_location.unwrap_or_default(),
                    row.receiver_location.unwrap_or_default(),
                ])
                .map_err(csv_error)?;
        }

        Ok(CsvReport {
            filename: "swap-stats-report.csv",
            content: finish(writer)?,
        })
    }
}

fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%m/%d/%Y").to_string()
}

fn csv_error(e: csv::Error) -> ServiceError {
    ServiceError::internal(format!("CSV encoding failed: {e}"))
}

fn finish(writer: csv::Writer<Vec<u8>>) -> ServiceResult<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| ServiceError::internal(format!("CSV encoding failed: {e}")))
}
