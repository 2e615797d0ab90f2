//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod admin;
pub mod auth;
pub mod context;
pub mod error;
pub mod message;
pub mod rating;
pub mod report;
pub mod skill;
pub mod swap;
pub mod user;

// Re-export all services for convenience
pub use admin::AdminService;
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use message::MessageService;
pub use rating::RatingService;
pub use report::ReportService;
pub use skill::SkillService;
pub use swap::SwapService;
pub use user::UserService;
