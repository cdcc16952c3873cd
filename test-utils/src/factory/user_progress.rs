//! Roadmap phase progress factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test progress rows for a user.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user_progress::UserProgressFactory;
///
/// let progress = UserProgressFactory::new(&db, &user.id)
///     .phase(3)
///     .progress(20)
///     .build()
///     .await?;
/// ```
pub struct UserProgressFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    phase: i32,
    progress: i32,
    completed_tasks: Vec<String>,
}

impl<'a> UserProgressFactory<'a> {
    /// Creates a new UserProgressFactory with default values.
    ///
    /// Defaults:
    /// - phase: `1`
    /// - progress: `0`
    /// - completed_tasks: empty
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of the owning user
    pub fn new(db: &'a DatabaseConnection, user_id: impl Into<String>) -> Self {
        Self {
            db,
            user_id: user_id.into(),
            phase: 1,
            progress: 0,
            completed_tasks: Vec::new(),
        }
    }

    /// Sets the roadmap phase number.
    pub fn phase(mut self, phase: i32) -> Self {
        self.phase = phase;
        self
    }

    /// Sets the completion percentage.
    pub fn progress(mut self, progress: i32) -> Self {
        self.progress = progress;
        self
    }

    /// Sets the completed task identifiers.
    pub fn completed_tasks<I, S>(mut self, tasks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.completed_tasks = tasks.into_iter().map(Into::into).collect();
        self
    }

    /// Builds and inserts the progress entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user_progress::Model)` - Created progress entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user_progress::Model, DbErr> {
        entity::user_progress::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            user_id: ActiveValue::Set(self.user_id),
            phase: ActiveValue::Set(self.phase),
            progress: ActiveValue::Set(self.progress),
            completed_tasks: ActiveValue::Set(serde_json::json!(self.completed_tasks)),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a phase 1 progress row with default values for the given user.
pub async fn create_user_progress(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::user_progress::Model, DbErr> {
    UserProgressFactory::new(db, user_id).build().await
}
