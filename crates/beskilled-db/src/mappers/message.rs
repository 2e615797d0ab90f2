//! Message entity <-> model mapper

use beskilled_core::entities::Message;
use beskilled_core::traits::MessageWithSender;
use beskilled_core::value_objects::Snowflake;

use crate::models::MessageWithSenderModel;

/// Convert joined model to MessageWithSender read model
impl From<MessageWithSenderModel> for MessageWithSender {
    fn from(model: MessageWithSenderModel) -> Self {
        MessageWithSender {
            message: Message {
                id: Snowflake::new(model.id),
                swap_id: Snowflake::new(model.swap_id),
                sender_id: Snowflake::new(model.sender_id),
                receiver_id: Snowflake::new(model.receiver_id),
                body: model.body,
                is_read: model.is_read,
                created_at: model.created_at,
            },
            sender_name: model.sender_name,
            sender_photo: model.sender_photo,
        }
    }
}
