//! Platform message entity - an announcement broadcast by an admin

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Platform-wide announcement authored by an admin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformMessage {
    pub id: Snowflake,
    pub title: String,
    pub body: String,
    pub kind: String,
    pub created_by: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl PlatformMessage {
    pub fn new(
        id: Snowflake,
        title: String,
        body: String,
        kind: String,
        created_by: Snowflake,
    ) -> Self {
        Self {
            id,
            title,
            body,
            kind,
            created_by,
            created_at: Utc::now(),
        }
    }
}
