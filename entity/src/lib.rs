//! SeaORM entity models for the roadmap tracker schema.

pub mod prelude;

pub mod income_stream;
pub mod skill_progress;
pub mod user;
pub mod user_progress;
