//! Skill entity <-> model mapper

use beskilled_core::entities::{Skill, SkillKind};
use beskilled_core::value_objects::Snowflake;

use crate::models::SkillModel;

/// Convert SkillModel to Skill entity
impl From<SkillModel> for Skill {
    fn from(model: SkillModel) -> Self {
        Skill {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            name: model.name,
            // Kind column has a CHECK constraint, unknown values cannot occur
            kind: SkillKind::parse(&model.kind).unwrap_or(SkillKind::Offered),
            is_approved: model.is_approved,
            created_at: model.created_at,
        }
    }
}
