//! Database row models

mod message;
mod rating;
mod report;
mod skill;
mod swap;
mod user;

pub use message::MessageWithSenderModel;
pub use rating::{RatingWithRatedModel, RatingWithRaterModel};
pub use report::{FeedbackLogModel, SwapStatsModel, UserActivityModel};
pub use skill::SkillModel;
pub use swap::{SwapModel, SwapWithPartiesModel};
pub use user::UserModel;
