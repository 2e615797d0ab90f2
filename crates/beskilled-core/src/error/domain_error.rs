//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Skill not found: {0}")]
    SkillNotFound(Snowflake),

    #[error("Swap request not found: {0}")]
    SwapNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Invalid swap status: {0}")]
    InvalidSwapStatus(String),

    #[error("Invalid skill kind: {0}")]
    InvalidSkillKind(String),

    #[error("Cannot send a swap request to yourself")]
    CannotSwapWithSelf,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Admin access required")]
    AdminRequired,

    #[error("Not a participant of this swap")]
    NotSwapParticipant,

    #[error("Only the receiver can update a swap request")]
    NotSwapReceiver,

    #[error("Cannot send a swap request to an admin account")]
    CannotSwapWithAdmin,

    #[error("Account is banned")]
    AccountBanned,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Rating already exists for this swap")]
    RatingAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Check if this is a not-found error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::SkillNotFound(_) | Self::SwapNotFound(_)
        )
    }

    /// Check if this is an authorization error
    #[must_use]
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::AdminRequired
                | Self::NotSwapParticipant
                | Self::NotSwapReceiver
                | Self::CannotSwapWithAdmin
                | Self::AccountBanned
        )
    }

    /// Check if this is a validation error
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::WeakPassword(_)
                | Self::InvalidSwapStatus(_)
                | Self::InvalidSkillKind(_)
                | Self::CannotSwapWithSelf
        )
    }

    /// Check if this is a conflict error
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::RatingAlreadyExists)
    }

    /// Stable error code for API responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::SkillNotFound(_) => "SKILL_NOT_FOUND",
            Self::SwapNotFound(_) => "SWAP_NOT_FOUND",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::InvalidSwapStatus(_) => "INVALID_SWAP_STATUS",
            Self::InvalidSkillKind(_) => "INVALID_SKILL_KIND",
            Self::CannotSwapWithSelf => "CANNOT_SWAP_WITH_SELF",
            Self::AdminRequired => "ADMIN_REQUIRED",
            Self::NotSwapParticipant => "NOT_SWAP_PARTICIPANT",
            Self::NotSwapReceiver => "NOT_SWAP_RECEIVER",
            Self::CannotSwapWithAdmin => "CANNOT_SWAP_WITH_ADMIN",
            Self::AccountBanned => "ACCOUNT_BANNED",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::RatingAlreadyExists => "RATING_ALREADY_EXISTS",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(DomainError::UserNotFound(Snowflake::new(1)).is_not_found());
        assert!(DomainError::SwapNotFound(Snowflake::new(1)).is_not_found());
        assert!(!DomainError::AdminRequired.is_not_found());
    }

    #[test]
    fn test_authorization_classification() {
        assert!(DomainError::AdminRequired.is_authorization());
        assert!(DomainError::NotSwapParticipant.is_authorization());
        assert!(DomainError::AccountBanned.is_authorization());
        assert!(!DomainError::EmailAlreadyExists.is_authorization());
    }

    #[test]
    fn test_conflict_classification() {
        assert!(DomainError::RatingAlreadyExists.is_conflict());
        assert!(DomainError::EmailAlreadyExists.is_conflict());
        assert!(!DomainError::InvalidEmail.is_conflict());
    }

    #[test]
    fn test_validation_classification() {
        assert!(DomainError::InvalidSwapStatus("done".to_string()).is_validation());
        assert!(DomainError::CannotSwapWithSelf.is_validation());
        assert!(!DomainError::DatabaseError("x".to_string()).is_validation());
    }

    #[test]
    fn test_codes() {
        assert_eq!(DomainError::RatingAlreadyExists.code(), "RATING_ALREADY_EXISTS");
        assert_eq!(DomainError::AdminRequired.code(), "ADMIN_REQUIRED");
    }
}
