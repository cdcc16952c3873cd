use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SkillProgress::Table)
                    .if_not_exists()
                    .col(string(SkillProgress::Id).primary_key())
                    .col(string(SkillProgress::UserId))
                    .col(string(SkillProgress::SkillCategory))
                    .col(string(SkillProgress::SkillName))
                    .col(integer(SkillProgress::Level).default(0))
                    .col(timestamp_with_time_zone(SkillProgress::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_skill_progress_user_id")
                            .from(SkillProgress::Table, SkillProgress::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_skill_progress_user_skill")
                            .col(SkillProgress::UserId)
                            .col(SkillProgress::SkillName),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SkillProgress::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SkillProgress {
    Table,
    Id,
    UserId,
    SkillCategory,
    SkillName,
    Level,
    UpdatedAt,
}
