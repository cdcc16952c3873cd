//! Income stream data repository for database operations.
//!
//! Provides the `IncomeStreamRepository`, keyed by `(user_id, stream_type)`.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::income_stream::{IncomeStream, UpsertIncomeStreamParam};

pub struct IncomeStreamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IncomeStreamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every income stream for a user, ordered by stream type.
    pub async fn get_by_user_id(&self, user_id: &str) -> Result<Vec<IncomeStream>, DbErr> {
        let entities = entity::prelude::IncomeStream::find()
            .filter(entity::income_stream::Column::UserId.eq(user_id))
            .order_by_asc(entity::income_stream::Column::StreamType)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(IncomeStream::from_entity).collect())
    }

    /// Finds one income stream of a user by type.
    pub async fn find_by_stream_type(
        &self,
        user_id: &str,
        stream_type: &str,
    ) -> Result<Option<IncomeStream>, DbErr> {
        let entity = self.find_model(user_id, stream_type).await?;

        Ok(entity.map(IncomeStream::from_entity))
    }

    /// Creates or updates an income stream.
    ///
    /// Runs as a single `INSERT ... ON CONFLICT (user_id, stream_type) DO UPDATE`.
    /// Provided fields overwrite the stored row; absent ones are kept. New rows default to
    /// inactive with no revenue.
    ///
    /// # Returns
    /// - `Ok(IncomeStream)` - The created or updated stream
    /// - `Err(DbErr)` - Database error during the upsert
    pub async fn upsert(&self, param: UpsertIncomeStreamParam) -> Result<IncomeStream, DbErr> {
        let mut update_columns = vec![entity::income_stream::Column::UpdatedAt];
        if param.is_active.is_some() {
            update_columns.push(entity::income_stream::Column::IsActive);
        }
        if param.monthly_revenue.is_some() {
            update_columns.push(entity::income_stream::Column::MonthlyRevenue);
        }

        let entity = entity::prelude::IncomeStream::insert(entity::income_stream::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            user_id: ActiveValue::Set(param.user_id),
            stream_type: ActiveValue::Set(param.stream_type),
            is_active: ActiveValue::Set(param.is_active.unwrap_or(false)),
            monthly_revenue: ActiveValue::Set(param.monthly_revenue.unwrap_or(0)),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::income_stream::Column::UserId,
                entity::income_stream::Column::StreamType,
            ])
            .update_columns(update_columns)
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(IncomeStream::from_entity(entity))
    }

    async fn find_model(
        &self,
        user_id: &str,
        stream_type: &str,
    ) -> Result<Option<entity::income_stream::Model>, DbErr> {
        entity::prelude::IncomeStream::find()
            .filter(entity::income_stream::Column::UserId.eq(user_id))
            .filter(entity::income_stream::Column::StreamType.eq(stream_type))
            .one(self.db)
            .await
    }
}
