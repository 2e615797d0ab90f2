//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub location: Option<String>,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test User {suffix}"),
            // Uuid keeps emails unique across test runs against the same database
            email: format!("test-{}@example.com", Uuid::new_v4()),
            password: "TestPass123".to_string(),
            location: Some("Testville".to_string()),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Token refresh request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
}

/// User profile response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub location: Option<String>,
    pub availability: Option<String>,
    pub role: String,
}

/// Profile update request
#[derive(Debug, Serialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub location: Option<String>,
    pub availability: Option<String>,
}

/// Add skill request
#[derive(Debug, Serialize)]
pub struct CreateSkillRequest {
    pub name: String,
    pub kind: String,
}

impl CreateSkillRequest {
    pub fn offered(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: "offered".to_string(),
        }
    }

    pub fn wanted(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: "wanted".to_string(),
        }
    }
}

/// Skill response
#[derive(Debug, Deserialize)]
pub struct SkillResponse {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub is_approved: bool,
}

/// Public profile with skills
#[derive(Debug, Deserialize)]
pub struct PublicProfileResponse {
    pub id: String,
    pub name: String,
    pub skills_offered: Vec<String>,
    pub skills_wanted: Vec<String>,
}

/// Search result row
#[derive(Debug, Deserialize)]
pub struct SearchUserResponse {
    pub id: String,
    pub name: String,
    pub location: Option<String>,
    pub skills: Vec<String>,
}

/// Send swap request
#[derive(Debug, Serialize)]
pub struct CreateSwapRequest {
    pub receiver_id: String,
    pub skill_offered: String,
    pub skill_requested: String,
    pub message: Option<String>,
}

impl CreateSwapRequest {
    pub fn to_user(receiver_id: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            receiver_id: receiver_id.to_string(),
            skill_offered: format!("Guitar {suffix}"),
            skill_requested: format!("Spanish {suffix}"),
            message: Some("Want to swap?".to_string()),
        }
    }
}

/// Swap status update request
#[derive(Debug, Serialize)]
pub struct UpdateSwapStatusRequest {
    pub status: String,
}

/// Swap response (bare row)
#[derive(Debug, Deserialize)]
pub struct SwapResponse {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub skill_offered: String,
    pub skill_requested: String,
    pub status: String,
}

/// Swap list row with party names
#[derive(Debug, Deserialize)]
pub struct SwapDetailResponse {
    pub id: String,
    pub status: String,
    pub sender_name: String,
    pub receiver_name: String,
}

/// Send message request
#[derive(Debug, Serialize)]
pub struct SendMessageRequest {
    pub swap_id: String,
    pub message: String,
}

/// Message response
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub id: String,
    pub swap_id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub message: String,
    pub is_read: bool,
    pub sender_name: String,
}

/// Mark-read response
#[derive(Debug, Deserialize)]
pub struct MarkReadResponse {
    pub updated: u64,
}

/// Add rating request
#[derive(Debug, Serialize)]
pub struct CreateRatingRequest {
    pub swap_id: String,
    pub rated_user: String,
    pub score: i16,
    pub comment: Option<String>,
}

/// Rating response (bare row)
#[derive(Debug, Deserialize)]
pub struct RatingResponse {
    pub id: String,
    pub swap_id: String,
    pub rated_by: String,
    pub rated_user: String,
    pub score: i16,
}

/// Rating received row with rater name
#[derive(Debug, Deserialize)]
pub struct RatingReceivedResponse {
    pub id: String,
    pub score: i16,
    pub rater_name: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
