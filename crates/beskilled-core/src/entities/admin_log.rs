//! Admin log entity - audit trail of moderation actions

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// One audit entry for a moderation action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminLog {
    pub id: Snowflake,
    pub admin_id: Snowflake,
    pub action: String,
    pub target_type: String,
    pub target_id: Option<Snowflake>,
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AdminLog {
    pub fn new(
        id: Snowflake,
        admin_id: Snowflake,
        action: impl Into<String>,
        target_type: impl Into<String>,
        target_id: Option<Snowflake>,
        details: Option<String>,
    ) -> Self {
        Self {
            id,
            admin_id,
            action: action.into(),
            target_type: target_type.into(),
            target_id,
            details,
            created_at: Utc::now(),
        }
    }
}
