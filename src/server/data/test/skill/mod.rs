use crate::server::{
    data::skill::SkillProgressRepository, error::AppError,
    model::skill::UpsertSkillProgressParam,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, factory::skill_progress::SkillProgressFactory};

mod get_by_user_id;
mod upsert;

fn param(user_id: &str, category: &str, name: &str, level: Option<i32>) -> UpsertSkillProgressParam {
    UpsertSkillProgressParam {
        user_id: user_id.to_string(),
        skill_category: category.to_string(),
        skill_name: name.to_string(),
        level,
    }
}
