//! Skill level factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Factory for creating test skill rows for a user.
pub struct SkillProgressFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    skill_category: String,
    skill_name: String,
    level: i32,
}

impl<'a> SkillProgressFactory<'a> {
    /// Creates a new SkillProgressFactory with default values.
    ///
    /// Defaults:
    /// - skill_category: `"technical"`
    /// - skill_name: `"Skill {id}"` where id is auto-incremented
    /// - level: `0`
    pub fn new(db: &'a DatabaseConnection, user_id: impl Into<String>) -> Self {
        Self {
            db,
            user_id: user_id.into(),
            skill_category: "technical".to_string(),
            skill_name: format!("Skill {}", next_id()),
            level: 0,
        }
    }

    pub fn skill_category(mut self, skill_category: impl Into<String>) -> Self {
        self.skill_category = skill_category.into();
        self
    }

    pub fn skill_name(mut self, skill_name: impl Into<String>) -> Self {
        self.skill_name = skill_name.into();
        self
    }

    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    /// Builds and inserts the skill entity into the database.
    pub async fn build(self) -> Result<entity::skill_progress::Model, DbErr> {
        entity::skill_progress::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            user_id: ActiveValue::Set(self.user_id),
            skill_category: ActiveValue::Set(self.skill_category),
            skill_name: ActiveValue::Set(self.skill_name),
            level: ActiveValue::Set(self.level),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a skill row with default values for the given user.
pub async fn create_skill_progress(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::skill_progress::Model, DbErr> {
    SkillProgressFactory::new(db, user_id).build().await
}
