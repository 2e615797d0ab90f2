//! # beskilled-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AuthResponse, BanUserRequest, BanUserResponse, CreatePlatformMessageRequest,
    CreateRatingRequest, CreateSkillRequest, CreateSwapRequest, CsvReport, CurrentUserResponse,
    HealthResponse, LoginRequest, MarkReadResponse, MessageResponse, ModerateSkillRequest,
    PlatformMessageResponse, PublicUserProfileResponse, RatingGivenResponse,
    RatingReceivedResponse, RatingResponse, ReadinessResponse, RefreshTokenRequest,
    RegisterRequest, ReportSummaryResponse, SearchUserResponse, SendMessageRequest, SkillResponse,
    SwapDetailResponse, SwapResponse, UpdateProfileRequest, UpdateSwapStatusRequest,
    UserAdminResponse, UserSearchParams,
};
pub use services::{
    AdminService, AuthService, MessageService, RatingService, ReportService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, SkillService, SwapService, UserService,
};
