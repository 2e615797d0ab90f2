//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    AdminLog, Message, PlatformMessage, Rating, Skill, SkillKind, SwapRequest, SwapStatus, User,
};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

/// Filters for the user browse/search query. Blank filters are skipped.
#[derive(Debug, Clone, Default)]
pub struct UserSearchQuery {
    /// The searching user, excluded from results
    pub viewer_id: Snowflake,
    pub name: Option<String>,
    pub location: Option<String>,
    pub skill: Option<String>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update the editable profile fields (name, location, availability)
    async fn update_profile(&self, user: &User) -> RepoResult<()>;

    /// Search visible non-admin users, ordered by name, capped at a limit
    async fn search(&self, query: &UserSearchQuery, limit: i64) -> RepoResult<Vec<User>>;

    /// List all users, newest first (admin view)
    async fn list_all(&self) -> RepoResult<Vec<User>>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Set the banned flag, returning the updated user
    async fn set_banned(&self, id: Snowflake, is_banned: bool) -> RepoResult<User>;
}

// ============================================================================
// Skill Repository
// ============================================================================

#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// Find skill by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Skill>>;

    /// List a user's skills ordered by kind then name
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Skill>>;

    /// Skill names for a set of users (for search result decoration)
    async fn names_for_users(&self, user_ids: &[Snowflake]) -> RepoResult<Vec<(Snowflake, String)>>;

    /// Create a new skill
    async fn create(&self, skill: &Skill) -> RepoResult<()>;

    /// Delete a skill owned by the given user; Ok(false) when no row matched
    async fn delete(&self, id: Snowflake, owner_id: Snowflake) -> RepoResult<bool>;

    /// Set the approval flag, returning the updated skill
    async fn set_approved(&self, id: Snowflake, is_approved: bool) -> RepoResult<Skill>;
}

// ============================================================================
// Swap Repository
// ============================================================================

/// Swap request joined with both parties' display data
#[derive(Debug, Clone)]
pub struct SwapWithParties {
    pub swap: SwapRequest,
    pub sender_name: String,
    pub sender_photo: Option<String>,
    pub receiver_name: String,
    pub receiver_photo: Option<String>,
}

#[async_trait]
pub trait SwapRepository: Send + Sync {
    /// Find swap by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<SwapRequest>>;

    /// Swaps where the user is sender or receiver, newest first,
    /// excluding rows whose counterpart is an admin
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<SwapWithParties>>;

    /// All swaps with party names, newest first (admin view)
    async fn list_all(&self) -> RepoResult<Vec<SwapWithParties>>;

    /// Create a new swap request
    async fn create(&self, swap: &SwapRequest) -> RepoResult<()>;

    /// Set the status of a swap owned by the given receiver,
    /// returning the updated row; None when no row matched
    async fn update_status(
        &self,
        id: Snowflake,
        receiver_id: Snowflake,
        status: SwapStatus,
    ) -> RepoResult<Option<SwapRequest>>;

    /// Delete a swap where the user is a party; Ok(false) when no row matched
    async fn delete(&self, id: Snowflake, user_id: Snowflake) -> RepoResult<bool>;
}

// ============================================================================
// Message Repository
// ============================================================================

/// Message joined with the sender's display data
#[derive(Debug, Clone)]
pub struct MessageWithSender {
    pub message: Message,
    pub sender_name: String,
    pub sender_photo: Option<String>,
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Messages of a swap, oldest first
    async fn find_by_swap(&self, swap_id: Snowflake) -> RepoResult<Vec<MessageWithSender>>;

    /// Create a new message
    async fn create(&self, message: &Message) -> RepoResult<()>;

    /// Mark every message of the swap addressed to the receiver as read,
    /// returning the number of rows updated
    async fn mark_read(&self, swap_id: Snowflake, receiver_id: Snowflake) -> RepoResult<u64>;
}

// ============================================================================
// Rating Repository
// ============================================================================

/// Rating joined with the rater's name
#[derive(Debug, Clone)]
pub struct RatingWithRater {
    pub rating: Rating,
    pub rater_name: String,
}

/// Rating joined with the rated user's name
#[derive(Debug, Clone)]
pub struct RatingWithRated {
    pub rating: Rating,
    pub rated_user_name: String,
}

#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Ratings received by a user, newest first, excluding admin raters
    async fn find_for_user(&self, rated_user: Snowflake) -> RepoResult<Vec<RatingWithRater>>;

    /// Ratings written by a user, newest first
    async fn find_given_by(&self, rated_by: Snowflake) -> RepoResult<Vec<RatingWithRated>>;

    /// Check whether the rater already rated this swap
    async fn exists(&self, swap_id: Snowflake, rated_by: Snowflake) -> RepoResult<bool>;

    /// Create a new rating
    async fn create(&self, rating: &Rating) -> RepoResult<()>;
}

// ============================================================================
// Platform Message Repository
// ============================================================================

#[async_trait]
pub trait PlatformMessageRepository: Send + Sync {
    /// Store a platform announcement
    async fn create(&self, message: &PlatformMessage) -> RepoResult<()>;
}

// ============================================================================
// Admin Log Repository
// ============================================================================

#[async_trait]
pub trait AdminLogRepository: Send + Sync {
    /// Append an audit entry
    async fn create(&self, log: &AdminLog) -> RepoResult<()>;
}

// ============================================================================
// Report Repository
// ============================================================================

/// Count of swaps in one status
#[derive(Debug, Clone)]
pub struct StatusCount {
    pub status: SwapStatus,
    pub total: i64,
}

/// Platform-wide aggregate counts for the admin dashboard
#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub total_users: i64,
    pub swaps_by_status: Vec<StatusCount>,
    pub avg_rating: Option<f64>,
    pub total_ratings: i64,
    pub skills_by_kind: Vec<(SkillKind, i64)>,
}

/// One row of the user activity export
#[derive(Debug, Clone)]
pub struct UserActivityRow {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub swaps_sent: i64,
    pub swaps_received: i64,
    pub total_skills: i64,
    pub ratings_given: i64,
}

/// One row of the feedback log export
#[derive(Debug, Clone)]
pub struct FeedbackLogRow {
    pub id: Snowflake,
    pub score: i16,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub rater_name: String,
    pub rated_user_name: String,
    pub skill_offered: String,
    pub skill_requested: String,
}

/// One row of the swap statistics export
#[derive(Debug, Clone)]
pub struct SwapStatsRow {
    pub id: Snowflake,
    pub skill_offered: String,
    pub skill_requested: String,
    pub status: SwapStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub sender_name: String,
    pub receiver_name: String,
    pub sender_location: Option<String>,
    pub receiver_location: Option<String>,
}

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Aggregate counts for the admin dashboard
    async fn summary(&self) -> RepoResult<ReportSummary>;

    /// Per-user activity counts, newest accounts first
    async fn user_activity(&self) -> RepoResult<Vec<UserActivityRow>>;

    /// All ratings with context, newest first
    async fn feedback_logs(&self) -> RepoResult<Vec<FeedbackLogRow>>;

    /// All swaps with party context, newest first
    async fn swap_stats(&self) -> RepoResult<Vec<SwapStatsRow>>;
}
