//! Skill database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for skills table
#[derive(Debug, Clone, FromRow)]
pub struct SkillModel {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub kind: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}
