use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{username_for, CreateUserParam},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod find_by_username;
