//! Domain models for roadmap phase progress.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::progress::{RoadmapPhase, UpsertUserProgressDto, UserProgressDto},
    server::error::validation::{require_range, require_text, ValidationError},
};

/// Progress of one user through one roadmap phase.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProgress {
    pub id: String,
    pub user_id: String,
    /// Roadmap phase number.
    pub phase: i32,
    /// Completion percentage.
    pub progress: i32,
    /// Identifiers of the tasks completed in this phase.
    pub completed_tasks: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl UserProgress {
    /// Converts the progress domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserProgressDto {
        UserProgressDto {
            id: self.id,
            user_id: self.user_id,
            phase: self.phase,
            progress: self.progress,
            completed_tasks: self.completed_tasks,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a progress domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(UserProgress)` - The converted domain model
    /// - `Err(DbErr::Custom)` - The stored `completed_tasks` value is not an array of strings
    pub fn from_entity(entity: entity::user_progress::Model) -> Result<Self, DbErr> {
        let completed_tasks: Vec<String> = serde_json::from_value(entity.completed_tasks)
            .map_err(|e| {
                DbErr::Custom(format!(
                    "Malformed completed_tasks for progress {}: {}",
                    entity.id, e
                ))
            })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            phase: entity.phase,
            progress: entity.progress,
            completed_tasks,
            updated_at: entity.updated_at,
        })
    }
}

/// Parameters for upserting the progress of a phase, keyed by `(user_id, phase)`.
///
/// `None` fields keep the stored value on update and fall back to the column default
/// (0 and an empty task list) on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertUserProgressParam {
    pub user_id: String,
    pub phase: RoadmapPhase,
    pub progress: Option<i32>,
    pub completed_tasks: Option<Vec<String>>,
}

impl UpsertUserProgressParam {
    /// Validates a progress request body.
    ///
    /// # Returns
    /// - `Ok(UpsertUserProgressParam)` - Valid parameters
    /// - `Err(ValidationError)` - Blank user id, unknown phase, or progress outside 0..=100
    pub fn from_dto(dto: UpsertUserProgressDto) -> Result<Self, ValidationError> {
        let user_id = require_text("userId", dto.user_id)?;
        let phase =
            RoadmapPhase::from_number(dto.phase).ok_or(ValidationError::UnknownPhase(dto.phase))?;
        let progress = dto
            .progress
            .map(|value| require_range("progress", value, 0, 100))
            .transpose()?;

        Ok(Self {
            user_id,
            phase,
            progress,
            completed_tasks: dto.completed_tasks,
        })
    }
}
