//! Report row mappers

use beskilled_core::entities::SwapStatus;
use beskilled_core::traits::{FeedbackLogRow, SwapStatsRow, UserActivityRow};
use beskilled_core::value_objects::Snowflake;

use crate::models::{FeedbackLogModel, SwapStatsModel, UserActivityModel};

impl From<UserActivityModel> for UserActivityRow {
    fn from(model: UserActivityModel) -> Self {
        UserActivityRow {
            id: Snowflake::new(model.id),
            name: model.name,
            email: model.email,
            location: model.location,
            created_at: model.created_at,
            swaps_sent: model.swaps_sent,
            swaps_received: model.swaps_received,
            total_skills: model.total_skills,
            ratings_given: model.ratings_given,
        }
    }
}

impl From<FeedbackLogModel> for FeedbackLogRow {
    fn from(model: FeedbackLogModel) -> Self {
        FeedbackLogRow {
            id: Snowflake::new(model.id),
            score: model.score,
            comment: model.comment,
            created_at: model.created_at,
            rater_name: model.rater_name,
            rated_user_name: model.rated_user_name,
            skill_offered: model.skill_offered,
            skill_requested: model.skill_requested,
        }
    }
}

impl From<SwapStatsModel> for SwapStatsRow {
    fn from(model: SwapStatsModel) -> Self {
        SwapStatsRow {
            id: Snowflake::new(model.id),
            skill_offered: model.skill_offered,
            skill_requested: model.skill_requested,
            status: SwapStatus::parse(&model.status).unwrap_or_default(),
            created_at: model.created_at,
            updated_at: model.updated_at,
            sender_name: model.sender_name,
            receiver_name: model.receiver_name,
            sender_location: model.sender_location,
            receiver_location: model.receiver_location,
        }
    }
}
