use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpsertSkillProgressDto {
    pub user_id: String,
    /// Only used when the skill is first recorded.
    pub skill_category: String,
    pub skill_name: String,
    /// Skill level, 0 to 100. Defaults to 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SkillProgressDto {
    pub id: String,
    pub user_id: String,
    pub skill_category: String,
    pub skill_name: String,
    pub level: i32,
    pub updated_at: DateTime<Utc>,
}
