use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub username: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::income_stream::Entity")]
    IncomeStream,
    #[sea_orm(has_many = "super::skill_progress::Entity")]
    SkillProgress,
    #[sea_orm(has_many = "super::user_progress::Entity")]
    UserProgress,
}

impl Related<super::income_stream::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IncomeStream.def()
    }
}

impl Related<super::skill_progress::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SkillProgress.def()
    }
}

impl Related<super::user_progress::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserProgress.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
