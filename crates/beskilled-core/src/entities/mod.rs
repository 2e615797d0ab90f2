//! Domain entities

mod admin_log;
mod message;
mod platform_message;
mod rating;
mod skill;
mod swap;
mod user;

pub use admin_log::AdminLog;
pub use message::Message;
pub use platform_message::PlatformMessage;
pub use rating::{Rating, MAX_SCORE, MIN_SCORE};
pub use skill::{Skill, SkillKind};
pub use swap::{SwapRequest, SwapStatus};
pub use user::{User, UserRole};
