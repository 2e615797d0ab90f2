//! Swap request database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for swap_requests table
#[derive(Debug, Clone, FromRow)]
pub struct SwapModel {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub skill_offered: String,
    pub skill_requested: String,
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Swap row joined with both parties' display columns
#[derive(Debug, Clone, FromRow)]
pub struct SwapWithPartiesModel {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub skill_offered: String,
    pub skill_requested: String,
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub sender_name: String,
    pub sender_photo: Option<String>,
    pub receiver_name: String,
    pub receiver_photo: Option<String>,
}
