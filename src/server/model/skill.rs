//! Domain models for skill levels.

use chrono::{DateTime, Utc};

use crate::{
    model::skill::{SkillProgressDto, UpsertSkillProgressDto},
    server::error::validation::{require_range, require_text, ValidationError},
};

/// A user's level in a single named skill.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillProgress {
    pub id: String,
    pub user_id: String,
    pub skill_category: String,
    pub skill_name: String,
    pub level: i32,
    pub updated_at: DateTime<Utc>,
}

impl SkillProgress {
    pub fn into_dto(self) -> SkillProgressDto {
        SkillProgressDto {
            id: self.id,
            user_id: self.user_id,
            skill_category: self.skill_category,
            skill_name: self.skill_name,
            level: self.level,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::skill_progress::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            skill_category: entity.skill_category,
            skill_name: entity.skill_name,
            level: entity.level,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for upserting a skill, keyed by `(user_id, skill_name)`.
///
/// The category is only written when the skill is first recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertSkillProgressParam {
    pub user_id: String,
    pub skill_category: String,
    pub skill_name: String,
    pub level: Option<i32>,
}

impl UpsertSkillProgressParam {
    pub fn from_dto(dto: UpsertSkillProgressDto) -> Result<Self, ValidationError> {
        Ok(Self {
            user_id: require_text("userId", dto.user_id)?,
            skill_category: require_text("skillCategory", dto.skill_category)?,
            skill_name: require_text("skillName", dto.skill_name)?,
            level: dto
                .level
                .map(|value| require_range("level", value, 0, 100))
                .transpose()?,
        })
    }
}
