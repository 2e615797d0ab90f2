//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    BanUserRequest, CreatePlatformMessageRequest, CreateRatingRequest, CreateSkillRequest,
    CreateSwapRequest, LoginRequest, ModerateSkillRequest, RefreshTokenRequest, RegisterRequest,
    SendMessageRequest, UpdateProfileRequest, UpdateSwapStatusRequest, UserSearchParams,
};

// Re-export commonly used response types
pub use responses::{
    AuthResponse, BanUserResponse, CsvReport, CurrentUserResponse, HealthResponse,
    MarkReadResponse, MessageResponse, PlatformMessageResponse, PublicUserProfileResponse,
    RatingGivenResponse, RatingReceivedResponse, RatingResponse, ReadinessResponse,
    ReportSummaryResponse, SearchUserResponse, SkillResponse, SwapDetailResponse, SwapResponse,
    UserAdminResponse,
};
