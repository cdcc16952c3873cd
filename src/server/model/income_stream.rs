//! Domain models for income streams.

use chrono::{DateTime, Utc};

use crate::{
    model::income::{IncomeStreamDto, UpsertIncomeStreamDto},
    server::error::validation::{require_text, ValidationError},
};

/// Status of one income stream (e.g. `micro-saas`, `consulting`) for a user.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeStream {
    pub id: String,
    pub user_id: String,
    pub stream_type: String,
    pub is_active: bool,
    /// Monthly revenue in whole currency units.
    pub monthly_revenue: i32,
    pub updated_at: DateTime<Utc>,
}

impl IncomeStream {
    pub fn into_dto(self) -> IncomeStreamDto {
        IncomeStreamDto {
            id: self.id,
            user_id: self.user_id,
            stream_type: self.stream_type,
            is_active: self.is_active,
            monthly_revenue: self.monthly_revenue,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::income_stream::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            stream_type: entity.stream_type,
            is_active: entity.is_active,
            monthly_revenue: entity.monthly_revenue,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for upserting an income stream, keyed by `(user_id, stream_type)`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertIncomeStreamParam {
    pub user_id: String,
    pub stream_type: String,
    pub is_active: Option<bool>,
    pub monthly_revenue: Option<i32>,
}

impl UpsertIncomeStreamParam {
    pub fn from_dto(dto: UpsertIncomeStreamDto) -> Result<Self, ValidationError> {
        let monthly_revenue = match dto.monthly_revenue {
            Some(value) if value < 0 => {
                return Err(ValidationError::Negative {
                    field: "monthlyRevenue",
                    value,
                })
            }
            other => other,
        };

        Ok(Self {
            user_id: require_text("userId", dto.user_id)?,
            stream_type: require_text("streamType", dto.stream_type)?,
            is_active: dto.is_active,
            monthly_revenue,
        })
    }
}
