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
                    .table(UserProgress::Table)
                    .if_not_exists()
                    .col(string(UserProgress::Id).primary_key())
                    .col(string(UserProgress::UserId))
                    .col(integer(UserProgress::Phase))
                    .col(integer(UserProgress::Progress).default(0))
                    .col(json(UserProgress::CompletedTasks))
                    .col(timestamp_with_time_zone(UserProgress::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_progress_user_id")
                            .from(UserProgress::Table, UserProgress::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_user_progress_user_phase")
                            .col(UserProgress::UserId)
                            .col(UserProgress::Phase),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserProgress::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserProgress {
    Table,
    Id,
    UserId,
    Phase,
    Progress,
    CompletedTasks,
    UpdatedAt,
}
