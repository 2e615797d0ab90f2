//! Repository traits (ports) for the infrastructure layer to implement

mod repositories;

pub use repositories::{
    AdminLogRepository, FeedbackLogRow, MessageRepository, MessageWithSender,
    PlatformMessageRepository, RatingRepository, RatingWithRated, RatingWithRater, RepoResult,
    ReportRepository, ReportSummary, SkillRepository, StatusCount, SwapRepository, SwapStatsRow,
    SwapWithParties, UserActivityRow, UserRepository, UserSearchQuery,
};
