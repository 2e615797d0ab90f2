//! Message entity - an in-app message exchanged inside a swap

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Message entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Snowflake,
    pub swap_id: Snowflake,
    pub sender_id: Snowflake,
    pub receiver_id: Snowflake,
    pub body: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new unread message
    pub fn new(
        id: Snowflake,
        swap_id: Snowflake,
        sender_id: Snowflake,
        receiver_id: Snowflake,
        body: String,
    ) -> Self {
        Self {
            id,
            swap_id,
            sender_id,
            receiver_id,
            body,
            is_read: false,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_is_unread() {
        let message = Message::new(
            Snowflake::new(1),
            Snowflake::new(2),
            Snowflake::new(3),
            Snowflake::new(4),
            "hello".to_string(),
        );
        assert!(!message.is_read);
    }
}
