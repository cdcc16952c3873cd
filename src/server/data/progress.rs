//! Roadmap progress data repository for database operations.
//!
//! This module provides the `UserProgressRepository` for reading and upserting phase
//! progress rows. A user has at most one row per roadmap phase, enforced by the unique
//! `(user_id, phase)` index that the upsert targets.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    model::progress::RoadmapPhase,
    server::model::progress::{UpsertUserProgressParam, UserProgress},
};

/// Repository providing database operations for roadmap phase progress.
pub struct UserProgressRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserProgressRepository<'a> {
    /// Creates a new UserProgressRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserProgressRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every progress row for a user, ordered by phase.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user
    ///
    /// # Returns
    /// - `Ok(Vec<UserProgress>)` - Progress rows (empty if the user has none or does not exist)
    /// - `Err(DbErr)` - Database error during query or a malformed task list
    pub async fn get_by_user_id(&self, user_id: &str) -> Result<Vec<UserProgress>, DbErr> {
        let entities = entity::prelude::UserProgress::find()
            .filter(entity::user_progress::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_progress::Column::Phase)
            .all(self.db)
            .await?;

        entities.into_iter().map(UserProgress::from_entity).collect()
    }

    /// Finds the progress row for one phase of a user.
    ///
    /// # Returns
    /// - `Ok(Some(UserProgress))` - Row found
    /// - `Ok(None)` - The user has no progress recorded for this phase
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_phase(
        &self,
        user_id: &str,
        phase: RoadmapPhase,
    ) -> Result<Option<UserProgress>, DbErr> {
        self.find_model(user_id, phase)
            .await?
            .map(UserProgress::from_entity)
            .transpose()
    }

    /// Creates or updates the progress row for a phase.
    ///
    /// Runs as a single `INSERT ... ON CONFLICT (user_id, phase) DO UPDATE`, so concurrent
    /// first writes to the same phase cannot fail on the unique index; the last write wins.
    /// On conflict only the provided fields and `updated_at` are overwritten and absent
    /// fields keep their stored values. A new row takes 0 progress and no tasks for absent
    /// fields.
    ///
    /// # Arguments
    /// - `param` - Natural key plus the fields to write
    ///
    /// # Returns
    /// - `Ok(UserProgress)` - The created or updated row
    /// - `Err(DbErr)` - Database error during the upsert
    pub async fn upsert(&self, param: UpsertUserProgressParam) -> Result<UserProgress, DbErr> {
        let mut update_columns = vec![entity::user_progress::Column::UpdatedAt];
        if param.progress.is_some() {
            update_columns.push(entity::user_progress::Column::Progress);
        }
        if param.completed_tasks.is_some() {
            update_columns.push(entity::user_progress::Column::CompletedTasks);
        }

        let tasks = param.completed_tasks.unwrap_or_default();

        let entity = entity::prelude::UserProgress::insert(entity::user_progress::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            user_id: ActiveValue::Set(param.user_id),
            phase: ActiveValue::Set(param.phase.number()),
            progress: ActiveValue::Set(param.progress.unwrap_or(0)),
            completed_tasks: ActiveValue::Set(serde_json::json!(tasks)),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::user_progress::Column::UserId,
                entity::user_progress::Column::Phase,
            ])
            .update_columns(update_columns)
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        UserProgress::from_entity(entity)
    }

    async fn find_model(
        &self,
        user_id: &str,
        phase: RoadmapPhase,
    ) -> Result<Option<entity::user_progress::Model>, DbErr> {
        entity::prelude::UserProgress::find()
            .filter(entity::user_progress::Column::UserId.eq(user_id))
            .filter(entity::user_progress::Column::Phase.eq(phase.number()))
            .one(self.db)
            .await
    }
}
