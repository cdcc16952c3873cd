//! Skill level service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::skill::SkillProgressRepository,
    error::AppError,
    model::skill::{SkillProgress, UpsertSkillProgressParam},
    service::user::UserService,
};

pub struct SkillService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> SkillService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every skill of a user, ordered by category and name.
    pub async fn get_for_user(&self, user_id: &str) -> Result<Vec<SkillProgress>, AppError> {
        let skill_repo = SkillProgressRepository::new(self.db);
        let skills = skill_repo.get_by_user_id(user_id).await?;
        Ok(skills)
    }

    /// Records a skill level for a user.
    ///
    /// # Returns
    /// - `Ok(SkillProgress)` - The created or updated skill
    /// - `Err(AppError::NotFound)` - The user does not exist
    /// - `Err(AppError::DbErr)` - Database error during lookup or upsert
    pub async fn upsert(&self, param: UpsertSkillProgressParam) -> Result<SkillProgress, AppError> {
        UserService::new(self.db)
            .require_user(&param.user_id)
            .await?;

        let skill_repo = SkillProgressRepository::new(self.db);
        let skill = skill_repo.upsert(param).await?;

        Ok(skill)
    }
}
