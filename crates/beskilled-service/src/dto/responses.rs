//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Current authenticated user response (includes email and role)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Public profile of another user, with their skill names split by kind
#[derive(Debug, Clone, Serialize)]
pub struct PublicUserProfileResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    pub created_at: DateTime<Utc>,
    pub skills_offered: Vec<String>,
    pub skills_wanted: Vec<String>,
}

/// One row of the user search results
#[derive(Debug, Clone, Serialize)]
pub struct SearchUserResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    pub skills: Vec<String>,
}

/// Full user row for the admin user list
#[derive(Debug, Clone, Serialize)]
pub struct UserAdminResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub is_public: bool,
    pub is_banned: bool,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Result of a ban/unban action
#[derive(Debug, Clone, Serialize)]
pub struct BanUserResponse {
    pub id: String,
    pub name: String,
    pub is_banned: bool,
}

// ============================================================================
// Skill Responses
// ============================================================================

/// Skill response
#[derive(Debug, Clone, Serialize)]
pub struct SkillResponse {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Swap Responses
// ============================================================================

/// Bare swap request row (create/update responses)
#[derive(Debug, Clone, Serialize)]
pub struct SwapResponse {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub skill_offered: String,
    pub skill_requested: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Swap request with both parties' display data (list responses)
#[derive(Debug, Clone, Serialize)]
pub struct SwapDetailResponse {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub skill_offered: String,
    pub skill_requested: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub sender_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_photo: Option<String>,
    pub receiver_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_photo: Option<String>,
}

// ============================================================================
// Message Responses
// ============================================================================

/// Message with the sender's display data
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub swap_id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub sender_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_photo: Option<String>,
}

/// Result of marking a swap's messages as read
#[derive(Debug, Clone, Serialize)]
pub struct MarkReadResponse {
    pub updated: u64,
}

// ============================================================================
// Rating Responses
// ============================================================================

/// Bare rating row (create response)
#[derive(Debug, Clone, Serialize)]
pub struct RatingResponse {
    pub id: String,
    pub swap_id: String,
    pub rated_by: String,
    pub rated_user: String,
    pub score: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Rating received by a user, with the rater's name
#[derive(Debug, Clone, Serialize)]
pub struct RatingReceivedResponse {
    pub id: String,
    pub swap_id: String,
    pub rated_by: String,
    pub rated_user: String,
    pub score: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub rater_name: String,
}

/// Rating written by a user, with the rated user's name
#[derive(Debug, Clone, Serialize)]
pub struct RatingGivenResponse {
    pub id: String,
    pub swap_id: String,
    pub rated_by: String,
    pub rated_user: String,
    pub score: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub rated_user_name: String,
}

// ============================================================================
// Admin Responses
// ============================================================================

/// Stored platform announcement
#[derive(Debug, Clone, Serialize)]
pub struct PlatformMessageResponse {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

/// Count of unbanned user accounts
#[derive(Debug, Clone, Serialize)]
pub struct UserCountResponse {
    pub total_users: i64,
}

/// Count of swaps in one status
#[derive(Debug, Clone, Serialize)]
pub struct StatusCountResponse {
    pub status: String,
    pub total_swaps: i64,
}

/// Average score and total count of ratings
#[derive(Debug, Clone, Serialize)]
pub struct RatingSummaryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_rating: Option<f64>,
    pub total_ratings: i64,
}

/// Count of approved skills of one kind
#[derive(Debug, Clone, Serialize)]
pub struct SkillCountResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub total_skills: i64,
}

/// Platform-wide summary for the admin dashboard
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummaryResponse {
    pub users: UserCountResponse,
    pub swaps: Vec<StatusCountResponse>,
    pub ratings: RatingSummaryResponse,
    pub skills: Vec<SkillCountResponse>,
}

/// A rendered CSV export ready to be served as a file download
#[derive(Debug, Clone)]
pub struct CsvReport {
    pub filename: &'static str,
    pub content: Vec<u8>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "unavailable" },
            database,
        }
    }
}
