//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use beskilled_core::entities::{PlatformMessage, Rating, Skill, SwapRequest, User};
use beskilled_core::traits::{
    MessageWithSender, RatingWithRated, RatingWithRater, ReportSummary, SwapWithParties,
};

use super::responses::{
    BanUserResponse, CurrentUserResponse, MessageResponse, PlatformMessageResponse,
    RatingGivenResponse, RatingReceivedResponse, RatingResponse, RatingSummaryResponse,
    ReportSummaryResponse, SkillCountResponse, SkillResponse, StatusCountResponse,
    SwapDetailResponse, SwapResponse, UserAdminResponse, UserCountResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            location: user.location.clone(),
            profile_photo_url: user.profile_photo_url.clone(),
            availability: user.availability.clone(),
            role: user.role.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for UserAdminResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            location: user.location.clone(),
            is_public: user.is_public,
            is_banned: user.is_banned,
            role: user.role.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

impl From<&User> for BanUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            is_banned: user.is_banned,
        }
    }
}

// ============================================================================
// Skill Mappers
// ============================================================================

impl From<&Skill> for SkillResponse {
    fn from(skill: &Skill) -> Self {
        Self {
            id: skill.id.to_string(),
            user_id: skill.user_id.to_string(),
            name: skill.name.clone(),
            kind: skill.kind.as_str().to_string(),
            is_approved: skill.is_approved,
            created_at: skill.created_at,
        }
    }
}

impl From<Skill> for SkillResponse {
    fn from(skill: Skill) -> Self {
        Self::from(&skill)
    }
}

// ============================================================================
// Swap Mappers
// ============================================================================

impl From<&SwapRequest> for SwapResponse {
    fn from(swap: &SwapRequest) -> Self {
        Self {
            id: swap.id.to_string(),
            sender_id: swap.sender_id.to_string(),
            receiver_id: swap.receiver_id.to_string(),
            skill_offered: swap.skill_offered.clone(),
            skill_requested: swap.skill_requested.clone(),
            message: swap.message.clone(),
            status: swap.status.as_str().to_string(),
            created_at: swap.created_at,
            updated_at: swap.updated_at,
        }
    }
}

impl From<SwapRequest> for SwapResponse {
    fn from(swap: SwapRequest) -> Self {
        Self::from(&swap)
    }
}

impl From<SwapWithParties> for SwapDetailResponse {
    fn from(detail: SwapWithParties) -> Self {
        let swap = detail.swap;
        Self {
            id: swap.id.to_string(),
            sender_id: swap.sender_id.to_string(),
            receiver_id: swap.receiver_id.to_string(),
            skill_offered: swap.skill_offered,
            skill_requested: swap.skill_requested,
            message: swap.message,
            status: swap.status.as_str().to_string(),
            created_at: swap.created_at,
            updated_at: swap.updated_at,
            sender_name: detail.sender_name,
            sender_photo: detail.sender_photo,
            receiver_name: detail.receiver_name,
            receiver_photo: detail.receiver_photo,
        }
    }
}

// ============================================================================
// Message Mappers
// ============================================================================

impl From<MessageWithSender> for MessageResponse {
    fn from(detail: MessageWithSender) -> Self {
        let message = detail.message;
        Self {
            id: message.id.to_string(),
            swap_id: message.swap_id.to_string(),
            sender_id: message.sender_id.to_string(),
            receiver_id: message.receiver_id.to_string(),
            message: message.body,
            is_read: message.is_read,
            created_at: message.created_at,
            sender_name: detail.sender_name,
            sender_photo: detail.sender_photo,
        }
    }
}

// ============================================================================
// Rating Mappers
// ============================================================================

impl From<&Rating> for RatingResponse {
    fn from(rating: &Rating) -> Self {
        Self {
            id: rating.id.to_string(),
            swap_id: rating.swap_id.to_string(),
            rated_by: rating.rated_by.to_string(),
            rated_user: rating.rated_user.to_string(),
            score: rating.score,
            comment: rating.comment.clone(),
            created_at: rating.created_at,
        }
    }
}

impl From<RatingWithRater> for RatingReceivedResponse {
    fn from(detail: RatingWithRater) -> Self {
        let rating = detail.rating;
        Self {
            id: rating.id.to_string(),
            swap_id: rating.swap_id.to_string(),
            rated_by: rating.rated_by.to_string(),
            rated_user: rating.rated_user.to_string(),
            score: rating.score,
            comment: rating.comment,
            created_at: rating.created_at,
            rater_name: detail.rater_name,
        }
    }
}

impl From<RatingWithRated> for RatingGivenResponse {
    fn from(detail: RatingWithRated) -> Self {
        let rating = detail.rating;
        Self {
            id: rating.id.to_string(),
            swap_id: rating.swap_id.to_string(),
            rated_by: rating.rated_by.to_string(),
            rated_user: rating.rated_user.to_string(),
            score: rating.score,
            comment: rating.comment,
            created_at: rating.created_at,
            rated_user_name: detail.rated_user_name,
        }
    }
}

// ============================================================================
// Admin Mappers
// ============================================================================

impl From<&PlatformMessage> for PlatformMessageResponse {
    fn from(message: &PlatformMessage) -> Self {
        Self {
            id: message.id.to_string(),
            title: message.title.clone(),
            message: message.body.clone(),
            kind: message.kind.clone(),
            created_by: message.created_by.to_string(),
            created_at: message.created_at,
        }
    }
}

impl From<ReportSummary> for ReportSummaryResponse {
    fn from(summary: ReportSummary) -> Self {
        Self {
            users: UserCountResponse {
                total_users: summary.total_users,
            },
            swaps: summary
                .swaps_by_status
                .into_iter()
                .map(|count| StatusCountResponse {
                    status: count.status.as_str().to_string(),
                    total_swaps: count.total,
                })
                .collect(),
            ratings: RatingSummaryResponse {
                avg_rating: summary.avg_rating,
                total_ratings: summary.total_ratings,
            },
            skills: summary
                .skills_by_kind
                .into_iter()
                .map(|(kind, total)| SkillCountResponse {
                    kind: kind.as_str().to_string(),
                    total_skills: total,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beskilled_core::entities::{SkillKind, SwapStatus};
    use beskilled_core::traits::StatusCount;
    use beskilled_core::Snowflake;

    #[test]
    fn test_current_user_response_from_user() {
        let user = User::new(
            Snowflake::new(7),
            "Ada".to_string(),
            "ada@example.com".to_string(),
        );
        let response = CurrentUserResponse::from(&user);
        assert_eq!(response.id, "7");
        assert_eq!(response.role, "user");
    }

    #[test]
    fn test_skill_response_renames_kind() {
        let skill = Skill::new(
            Snowflake::new(1),
            Snowflake::new(2),
            "Guitar".to_string(),
            SkillKind::Wanted,
        );
        let response = SkillResponse::from(&skill);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["type"], "wanted");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_report_summary_mapping() {
        let summary = ReportSummary {
            total_users: 3,
            swaps_by_status: vec![StatusCount {
                status: SwapStatus::Accepted,
                total: 2,
            }],
            avg_rating: Some(4.5),
            total_ratings: 10,
            skills_by_kind: vec![(SkillKind::Offered, 5)],
        };
        let response = ReportSummaryResponse::from(summary);
        assert_eq!(response.users.total_users, 3);
        assert_eq!(response.swaps[0].status, "accepted");
        assert_eq!(response.skills[0].total_skills, 5);
    }
}
