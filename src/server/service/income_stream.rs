//! Income stream service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::income_stream::IncomeStreamRepository,
    error::AppError,
    model::income_stream::{IncomeStream, UpsertIncomeStreamParam},
    service::user::UserService,
};

pub struct IncomeStreamService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> IncomeStreamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every income stream of a user, ordered by stream type.
    pub async fn get_for_user(&self, user_id: &str) -> Result<Vec<IncomeStream>, AppError> {
        let stream_repo = IncomeStreamRepository::new(self.db);
        let streams = stream_repo.get_by_user_id(user_id).await?;
        Ok(streams)
    }

    /// Records the status of an income stream for a user.
    ///
    /// # Returns
    /// - `Ok(IncomeStream)` - The created or updated stream
    /// - `Err(AppError::NotFound)` - The user does not exist
    /// - `Err(AppError::DbErr)` - Database error during lookup or upsert
    pub async fn upsert(&self, param: UpsertIncomeStreamParam) -> Result<IncomeStream, AppError> {
        UserService::new(self.db)
            .require_user(&param.user_id)
            .await?;

        let stream_repo = IncomeStreamRepository::new(self.db);
        let stream = stream_repo.upsert(param).await?;

        if stream.is_active {
            tracing::debug!(
                "Income stream {} active for user {} at {}/month",
                stream.stream_type,
                stream.user_id,
                stream.monthly_revenue
            );
        }

        Ok(stream)
    }
}
