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
                    .table(IncomeStreams::Table)
                    .if_not_exists()
                    .col(string(IncomeStreams::Id).primary_key())
                    .col(string(IncomeStreams::UserId))
                    .col(string(IncomeStreams::StreamType))
                    .col(boolean(IncomeStreams::IsActive).default(false))
                    .col(integer(IncomeStreams::MonthlyRevenue).default(0))
                    .col(timestamp_with_time_zone(IncomeStreams::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_income_streams_user_id")
                            .from(IncomeStreams::Table, IncomeStreams::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_income_streams_user_stream")
                            .col(IncomeStreams::UserId)
                            .col(IncomeStreams::StreamType),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(IncomeStreams::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum IncomeStreams {
    Table,
    Id,
    UserId,
    StreamType,
    IsActive,
    MonthlyRevenue,
    UpdatedAt,
}
