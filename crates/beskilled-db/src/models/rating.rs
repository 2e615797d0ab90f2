//! Rating database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Rating row joined with the rater's name
#[derive(Debug, Clone, FromRow)]
pub struct RatingWithRaterModel {
    pub id: i64,
    pub swap_id: i64,
    pub rated_by: i64,
    pub rated_user: i64,
    pub score: i16,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub rater_name: String,
}

/// Rating row joined with the rated user's name
#[derive(Debug, Clone, FromRow)]
pub struct RatingWithRatedModel {
    pub id: i64,
    pub swap_id: i64,
    pub rated_by: i64,
    pub rated_user: i64,
    pub score: i16,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub rated_user_name: String,
}
