//! Rating entity - post-swap feedback from one party about the other

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Minimum allowed score
pub const MIN_SCORE: i16 = 1;
/// Maximum allowed score
pub const MAX_SCORE: i16 = 5;

/// Rating entity. At most one rating exists per (swap, rater) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub id: Snowflake,
    pub swap_id: Snowflake,
    pub rated_by: Snowflake,
    pub rated_user: Snowflake,
    pub score: i16,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Rating {
    /// Create a new rating, validating the score range
    pub fn new(
        id: Snowflake,
        swap_id: Snowflake,
        rated_by: Snowflake,
        rated_user: Snowflake,
        score: i16,
        comment: Option<String>,
    ) -> Result<Self, DomainError> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(DomainError::ValidationError(format!(
                "Score must be between {MIN_SCORE} and {MAX_SCORE}"
            )));
        }

        Ok(Self {
            id,
            swap_id,
            rated_by,
            rated_user,
            score,
            comment,
            created_at: Utc::now(),
        })
    }
}
