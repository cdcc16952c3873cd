//! Skill level data repository for database operations.
//!
//! Provides the `SkillProgressRepository`. Skills are keyed by `(user_id, skill_name)`;
//! the category is recorded when a skill is first inserted and never rewritten.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::skill::{SkillProgress, UpsertSkillProgressParam};

/// Repository providing database operations for skill levels.
pub struct SkillProgressRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SkillProgressRepository<'a> {
    /// Creates a new SkillProgressRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every skill for a user, ordered by category and then name.
    ///
    /// # Returns
    /// - `Ok(Vec<SkillProgress>)` - Skills (empty if the user has none or does not exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user_id(&self, user_id: &str) -> Result<Vec<SkillProgress>, DbErr> {
        let entities = entity::prelude::SkillProgress::find()
            .filter(entity::skill_progress::Column::UserId.eq(user_id))
            .order_by_asc(entity::skill_progress::Column::SkillCategory)
            .order_by_asc(entity::skill_progress::Column::SkillName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(SkillProgress::from_entity).collect())
    }

    /// Finds one skill of a user by name.
    pub async fn find_by_skill_name(
        &self,
        user_id: &str,
        skill_name: &str,
    ) -> Result<Option<SkillProgress>, DbErr> {
        let entity = self.find_model(user_id, skill_name).await?;

        Ok(entity.map(SkillProgress::from_entity))
    }

    /// Creates or updates a skill.
    ///
    /// Runs as a single `INSERT ... ON CONFLICT (user_id, skill_name) DO UPDATE`. An
    /// existing row only has its level (when provided) and `updated_at` rewritten. A new
    /// row takes the provided category and a level of 0 when none is given.
    ///
    /// # Returns
    /// - `Ok(SkillProgress)` - The created or updated skill
    /// - `Err(DbErr)` - Database error during the upsert
    pub async fn upsert(&self, param: UpsertSkillProgressParam) -> Result<SkillProgress, DbErr> {
        let mut update_columns = vec![entity::skill_progress::Column::UpdatedAt];
        if param.level.is_some() {
            update_columns.push(entity::skill_progress::Column::Level);
        }

        let entity = entity::prelude::SkillProgress::insert(entity::skill_progress::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            user_id: ActiveValue::Set(param.user_id),
            skill_category: ActiveValue::Set(param.skill_category),
            skill_name: ActiveValue::Set(param.skill_name),
            level: ActiveValue::Set(param.level.unwrap_or(0)),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::skill_progress::Column::UserId,
                entity::skill_progress::Column::SkillName,
            ])
            .update_columns(update_columns)
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(SkillProgress::from_entity(entity))
    }

    async fn find_model(
        &self,
        user_id: &str,
        skill_name: &str,
    ) -> Result<Option<entity::skill_progress::Model>, DbErr> {
        entity::prelude::SkillProgress::find()
            .filter(entity::skill_progress::Column::UserId.eq(user_id))
            .filter(entity::skill_progress::Column::SkillName.eq(skill_name))
            .one(self.db)
            .await
    }
}
