//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

use beskilled_core::Snowflake;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    #[validate(length(max = 100, message = "Location must be at most 100 characters"))]
    pub location: Option<String>,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Update own profile request (full overwrite of the editable fields)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,

    #[validate(length(max = 100, message = "Location must be at most 100 characters"))]
    pub location: Option<String>,

    #[validate(length(max = 200, message = "Availability must be at most 200 characters"))]
    pub availability: Option<String>,
}

/// Query parameters for user search; blank filters are skipped
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserSearchParams {
    pub name: Option<String>,
    pub location: Option<String>,
    pub skill: Option<String>,
}

// ============================================================================
// Skill Requests
// ============================================================================

/// Add skill request. `kind` must be "offered" or "wanted".
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSkillRequest {
    #[validate(length(min = 1, max = 100, message = "Skill name must be 1-100 characters"))]
    pub name: String,

    pub kind: String,
}

// ============================================================================
// Swap Requests
// ============================================================================

/// Send swap request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSwapRequest {
    pub receiver_id: Snowflake,

    #[validate(length(min = 1, max = 100, message = "Offered skill must be 1-100 characters"))]
    pub skill_offered: String,

    #[validate(length(min = 1, max = 100, message = "Requested skill must be 1-100 characters"))]
    pub skill_requested: String,

    #[validate(length(max = 1000, message = "Message must be at most 1000 characters"))]
    pub message: Option<String>,
}

/// Update swap status request. `status` must be "accepted" or "rejected".
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSwapStatusRequest {
    pub status: String,
}

// ============================================================================
// Message Requests
// ============================================================================

/// Send message request. The receiver is derived from the swap.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendMessageRequest {
    pub swap_id: Snowflake,

    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub message: String,
}

// ============================================================================
// Rating Requests
// ============================================================================

/// Add rating request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRatingRequest {
    pub swap_id: Snowflake,

    pub rated_user: Snowflake,

    #[validate(range(min = 1, max = 5, message = "Score must be between 1 and 5"))]
    pub score: i16,

    #[validate(length(max = 1000, message = "Comment must be at most 1000 characters"))]
    pub comment: Option<String>,
}

// ============================================================================
// Admin Requests
// ============================================================================

/// Ban or unban a user
#[derive(Debug, Clone, Deserialize)]
pub struct BanUserRequest {
    pub is_banned: bool,
}

/// Approve or reject a skill. `action` must be "approve" or "reject".
#[derive(Debug, Clone, Deserialize)]
pub struct ModerateSkillRequest {
    pub action: String,
}

/// Broadcast a platform announcement
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePlatformMessageRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub message: String,

    #[validate(length(min = 1, max = 50, message = "Type must be 1-50 characters"))]
    #[serde(rename = "type")]
    pub kind: String,
}
