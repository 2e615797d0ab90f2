//! User entity <-> model mapper

use beskilled_core::entities::{User, UserRole};
use beskilled_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            name: model.name,
            email: model.email,
            location: model.location,
            profile_photo_url: model.profile_photo_url,
            availability: model.availability,
            // Role column has a CHECK constraint, unknown values cannot occur
            role: UserRole::parse(&model.role).unwrap_or_default(),
            is_public: model.is_public,
            is_banned: model.is_banned,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
