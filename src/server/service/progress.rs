//! Roadmap progress service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::progress::UserProgressRepository,
    error::AppError,
    model::progress::{UpsertUserProgressParam, UserProgress},
    service::user::UserService,
};

/// Service providing business logic for roadmap phase progress.
pub struct ProgressService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ProgressService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every phase progress row of a user, ordered by phase.
    ///
    /// Unknown users have no rows, so an empty list is returned rather than an error.
    pub async fn get_for_user(&self, user_id: &str) -> Result<Vec<UserProgress>, AppError> {
        let progress_repo = UserProgressRepository::new(self.db);
        let progress = progress_repo.get_by_user_id(user_id).await?;
        Ok(progress)
    }

    /// Records progress for one phase of a user.
    ///
    /// # Returns
    /// - `Ok(UserProgress)` - The created or updated row
    /// - `Err(AppError::NotFound)` - The user does not exist
    /// - `Err(AppError::DbErr)` - Database error during lookup or upsert
    pub async fn upsert(&self, param: UpsertUserProgressParam) -> Result<UserProgress, AppError> {
        UserService::new(self.db)
            .require_user(&param.user_id)
            .await?;

        let progress_repo = UserProgressRepository::new(self.db);
        let progress = progress_repo.upsert(param).await?;

        tracing::debug!(
            "Recorded phase {} progress {} for user {}",
            progress.phase,
            progress.progress,
            progress.user_id
        );

        Ok(progress)
    }
}
