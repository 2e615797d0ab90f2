//! Rating entity <-> model mappers

use beskilled_core::entities::Rating;
use beskilled_core::traits::{RatingWithRated, RatingWithRater};
use beskilled_core::value_objects::Snowflake;

use crate::models::{RatingWithRatedModel, RatingWithRaterModel};

impl From<RatingWithRaterModel> for RatingWithRater {
    fn from(model: RatingWithRaterModel) -> Self {
        RatingWithRater {
            rating: Rating {
                id: Snowflake::new(model.id),
                swap_id: Snowflake::new(model.swap_id),
                rated_by: Snowflake::new(model.rated_by),
                rated_user: Snowflake::new(model.rated_user),
                score: model.score,
                comment: model.comment,
                created_at: model.created_at,
            },
            rater_name: model.rater_name,
        }
    }
}

impl From<RatingWithRatedModel> for RatingWithRated {
    fn from(model: RatingWithRatedModel) -> Self {
        RatingWithRated {
            rating: Rating {
                id: Snowflake::new(model.id),
                swap_id: Snowflake::new(model.swap_id),
                rated_by: Snowflake::new(model.rated_by),
                rated_user: Snowflake::new(model.rated_user),
                score: model.score,
                comment: model.comment,
                created_at: model.created_at,
            },
            rated_user_name: model.rated_user_name,
        }
    }
}
