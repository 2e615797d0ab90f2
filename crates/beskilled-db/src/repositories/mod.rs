//! PostgreSQL repository implementations

mod admin_log;
mod error;
mod message;
mod platform_message;
mod rating;
mod report;
mod skill;
mod swap;
mod user;

pub use admin_log::PgAdminLogRepository;
pub use message::PgMessageRepository;
pub use platform_message::PgPlatformMessageRepository;
pub use rating::PgRatingRepository;
pub use report::PgReportRepository;
pub use skill::PgSkillRepository;
pub use swap::PgSwapRepository;
pub use user::PgUserRepository;
