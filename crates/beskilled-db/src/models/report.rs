//! Report query row models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Per-user activity counts for the user activity export
#[derive(Debug, Clone, FromRow)]
pub struct UserActivityModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub swaps_sent: i64,
    pub swaps_received: i64,
    pub total_skills: i64,
    pub ratings_given: i64,
}

/// Rating with context for the feedback log export
#[derive(Debug, Clone, FromRow)]
pub struct FeedbackLogModel {
    pub id: i64,
    pub score: i16,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub rater_name: String,
    pub rated_user_name: String,
    pub skill_offered: String,
    pub skill_requested: String,
}

/// Swap with party context for the swap statistics export
#[derive(Debug, Clone, FromRow)]
pub struct SwapStatsModel {
    pub id: i64,
    pub skill_offered: String,
    pub skill_requested: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub sender_name: String,
    pub receiver_name: String,
    pub sender_location: Option<String>,
    pub receiver_location: Option<String>,
}
