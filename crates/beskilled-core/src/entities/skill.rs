//! Skill entity - a skill a user offers or wants to learn

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Whether the owner teaches this skill or wants to learn it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    Offered,
    Wanted,
}

impl SkillKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Offered => "offered",
            Self::Wanted => "wanted",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "offered" => Some(Self::Offered),
            "wanted" => Some(Self::Wanted),
            _ => None,
        }
    }
}

impl std::fmt::Display for SkillKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Skill entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub name: String,
    pub kind: SkillKind,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

impl Skill {
    /// Create a new approved skill for a user
    pub fn new(id: Snowflake, user_id: Snowflake, name: String, kind: SkillKind) -> Self {
        Self {
            id,
            user_id,
            name,
            kind,
            is_approved: true,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip() {
        assert_eq!(SkillKind::parse("offered"), Some(SkillKind::Offered));
        assert_eq!(SkillKind::parse("wanted"), Some(SkillKind::Wanted));
        assert_eq!(SkillKind::parse("other"), None);
        assert_eq!(SkillKind::parse(SkillKind::Wanted.as_str()), Some(SkillKind::Wanted));
    }

    #[test]
    fn test_new_skill_is_approved() {
        let skill = Skill::new(
            Snowflake::new(1),
            Snowflake::new(2),
            "Guitar".to_string(),
            SkillKind::Offered,
        );
        assert!(skill.is_approved);
    }
}
