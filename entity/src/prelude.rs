pub use super::income_stream::Entity as IncomeStream;
pub use super::skill_progress::Entity as SkillProgress;
pub use super::user::Entity as User;
pub use super::user_progress::Entity as UserProgress;
