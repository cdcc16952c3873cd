//! Income stream factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Factory for creating test income stream rows for a user.
pub struct IncomeStreamFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    stream_type: String,
    is_active: bool,
    monthly_revenue: i32,
}

impl<'a> IncomeStreamFactory<'a> {
    /// Creates a new IncomeStreamFactory with default values.
    ///
    /// Defaults:
    /// - stream_type: `"stream-{id}"` where id is auto-incremented
    /// - is_active: `false`
    /// - monthly_revenue: `0`
    pub fn new(db: &'a DatabaseConnection, user_id: impl Into<String>) -> Self {
        Self {
            db,
            user_id: user_id.into(),
            stream_type: format!("stream-{}", next_id()),
            is_active: false,
            monthly_revenue: 0,
        }
    }

    pub fn stream_type(mut self, stream_type: impl Into<String>) -> Self {
        self.stream_type = stream_type.into();
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn monthly_revenue(mut self, monthly_revenue: i32) -> Self {
        self.monthly_revenue = monthly_revenue;
        self
    }

    /// Builds and inserts the income stream entity into the database.
    pub async fn build(self) -> Result<entity::income_stream::Model, DbErr> {
        entity::income_stream::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            user_id: ActiveValue::Set(self.user_id),
            stream_type: ActiveValue::Set(self.stream_type),
            is_active: ActiveValue::Set(self.is_active),
            monthly_revenue: ActiveValue::Set(self.monthly_revenue),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an inactive income stream with default values for the given user.
pub async fn create_income_stream(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::income_stream::Model, DbErr> {
    IncomeStreamFactory::new(db, user_id).build().await
}
