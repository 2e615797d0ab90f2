//! Swap request entity <-> model mappers

use beskilled_core::entities::{SwapRequest, SwapStatus};
use beskilled_core::traits::SwapWithParties;
use beskilled_core::value_objects::Snowflake;

use crate::models::{SwapModel, SwapWithPartiesModel};

/// Convert SwapModel to SwapRequest entity
impl From<SwapModel> for SwapRequest {
    fn from(model: SwapModel) -> Self {
        SwapRequest {
            id: Snowflake::new(model.id),
            sender_id: Snowflake::new(model.sender_id),
            receiver_id: Snowflake::new(model.receiver_id),
            skill_offered: model.skill_offered,
            skill_requested: model.skill_requested,
            message: model.message,
            // Status column has a CHECK constraint, unknown values cannot occur
            status: SwapStatus::parse(&model.status).unwrap_or_default(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert joined model to SwapWithParties read model
impl From<SwapWithPartiesModel> for SwapWithParties {
    fn from(model: SwapWithPartiesModel) -> Self {
        SwapWithParties {
            swap: SwapRequest {
                id: Snowflake::new(model.id),
                sender_id: Snowflake::new(model.sender_id),
                receiver_id: Snowflake::new(model.receiver_id),
                skill_offered: model.skill_offered,
                skill_requested: model.skill_requested,
                message: model.message,
                status: SwapStatus::parse(&model.status).unwrap_or_default(),
                created_at: model.created_at,
                updated_at: model.updated_at,
            },
            sender_name: model.sender_name,
            sender_photo: model.sender_photo,
            receiver_name: model.receiver_name,
            receiver_photo: model.receiver_photo,
        }
    }
}
