use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Numbered stage of the roadmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RoadmapPhase {
    Foundation,
    Integration,
    Expansion,
    PivotScale,
}

impl RoadmapPhase {
    pub const ALL: [RoadmapPhase; 4] = [
        RoadmapPhase::Foundation,
        RoadmapPhase::Integration,
        RoadmapPhase::Expansion,
        RoadmapPhase::PivotScale,
    ];

    /// Phase number as stored in the `phase` column, starting at 1.
    pub fn number(self) -> i32 {
        match self {
            RoadmapPhase::Foundation => 1,
            RoadmapPhase::Integration => 2,
            RoadmapPhase::Expansion => 3,
            RoadmapPhase::PivotScale => 4,
        }
    }

    pub fn from_number(number: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|phase| phase.number() == number)
    }

    pub fn slug(self) -> &'static str {
        match self {
            RoadmapPhase::Foundation => "foundation",
            RoadmapPhase::Integration => "integration",
            RoadmapPhase::Expansion => "expansion",
            RoadmapPhase::PivotScale => "pivot-scale",
        }
    }
}

impl fmt::Display for RoadmapPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Accepts either the phase number (`"2"`) or its slug (`"integration"`).
impl FromStr for RoadmapPhase {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if let Ok(number) = value.parse::<i32>() {
            return Self::from_number(number)
                .ok_or_else(|| format!("unknown roadmap phase number {}", number));
        }

        Self::ALL
            .into_iter()
            .find(|phase| phase.slug().eq_ignore_ascii_case(value))
            .ok_or_else(|| format!("unknown roadmap phase '{}'", value))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpsertUserProgressDto {
    pub user_id: String,
    /// Roadmap phase number (1 foundation, 2 integration, 3 expansion, 4 pivot-scale).
    pub phase: i32,
    /// Completion percentage, 0 to 100. Defaults to 0 on first insert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<i32>,
    /// Replaces the stored task list when present; left untouched otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_tasks: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserProgressDto {
    pub id: String,
    pub user_id: String,
    pub phase: i32,
    pub progress: i32,
    pub completed_tasks: Vec<String>,
    pub updated_at: DateTime<Utc>,
}
