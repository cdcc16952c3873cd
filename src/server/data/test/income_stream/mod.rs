use crate::server::{
    data::income_stream::IncomeStreamRepository, error::AppError,
    model::income_stream::UpsertIncomeStreamParam,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, factory::income_stream::IncomeStreamFactory};

mod get_by_user_id;
mod upsert;

fn param(
    user_id: &str,
    stream_type: &str,
    is_active: Option<bool>,
    monthly_revenue: Option<i32>,
) -> UpsertIncomeStreamParam {
    UpsertIncomeStreamParam {
        user_id: user_id.to_string(),
        stream_type: stream_type.to_string(),
        is_active,
        monthly_revenue,
    }
}
