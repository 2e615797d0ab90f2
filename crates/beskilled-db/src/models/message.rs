//! Message database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Message row joined with the sender's display columns
#[derive(Debug, Clone, FromRow)]
pub struct MessageWithSenderModel {
    pub id: i64,
    pub swap_id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub body: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub sender_name: String,
    pub sender_photo: Option<String>,
}
