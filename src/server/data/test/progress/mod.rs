use crate::{
    model::progress::RoadmapPhase,
    server::{
        data::progress::UserProgressRepository, error::AppError,
        model::progress::UpsertUserProgressParam,
    },
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory, factory::user_progress::UserProgressFactory};

mod get_by_user_id;
mod upsert;

fn param(user_id: &str, phase: RoadmapPhase) -> UpsertUserProgressParam {
    UpsertUserProgressParam {
        user_id: user_id.to_string(),
        phase,
        progress: None,
        completed_tasks: None,
    }
}
