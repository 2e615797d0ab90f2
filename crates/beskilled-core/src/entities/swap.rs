//! Swap request entity - a proposal to exchange one skill for another

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Lifecycle status of a swap request
///
/// The only transitions are `Pending -> Accepted` and `Pending -> Rejected`,
/// decided by the receiver. Last write wins; there are no further states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl SwapStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// An accepted swap is a "connection" and unlocks messaging
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl std::fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Swap request entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    pub id: Snowflake,
    pub sender_id: Snowflake,
    pub receiver_id: Snowflake,
    pub skill_offered: String,
    pub skill_requested: String,
    pub message: Option<String>,
    pub status: SwapStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SwapRequest {
    /// Create a new pending swap request
    pub fn new(
        id: Snowflake,
        sender_id: Snowflake,
        receiver_id: Snowflake,
        skill_offered: String,
        skill_requested: String,
        message: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            sender_id,
            receiver_id,
            skill_offered,
            skill_requested,
            message,
            status: SwapStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether a user is one of the two parties
    #[inline]
    pub fn involves(&self, user_id: Snowflake) -> bool {
        self.sender_id == user_id || self.receiver_id == user_id
    }

    /// The other party of the swap, if the given user is a party at all
    pub fn counterpart_of(&self, user_id: Snowflake) -> Option<Snowflake> {
        if user_id == self.sender_id {
            Some(self.receiver_id)
        } else if user_id == self.receiver_id {
            Some(self.sender_id)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swap() -> SwapRequest {
        SwapRequest::new(
            Snowflake::new(1),
            Snowflake::new(10),
            Snowflake::new(20),
            "Guitar".to_string(),
            "Spanish".to_string(),
            None,
        )
    }

    #[test]
    fn test_new_swap_is_pending() {
        assert_eq!(swap().status, SwapStatus::Pending);
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [SwapStatus::Pending, SwapStatus::Accepted, SwapStatus::Rejected] {
            assert_eq!(SwapStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(SwapStatus::parse("cancelled"), None);
    }

    #[test]
    fn test_involves() {
        let swap = swap();
        assert!(swap.involves(Snowflake::new(10)));
        assert!(swap.involves(Snowflake::new(20)));
        assert!(!swap.involves(Snowflake::new(30)));
    }

    #[test]
    fn test_counterpart() {
        let swap = swap();
        assert_eq!(swap.counterpart_of(Snowflake::new(10)), Some(Snowflake::new(20)));
        assert_eq!(swap.counterpart_of(Snowflake::new(20)), Some(Snowflake::new(10)));
        assert_eq!(swap.counterpart_of(Snowflake::new(30)), None);
    }
}
