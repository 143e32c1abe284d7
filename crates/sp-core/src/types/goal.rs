use crate::types::enums::{GoalKind, GoalStatus, Priority};
use crate::types::ids::GoalId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyGoal {
    pub id: GoalId,
    pub title: String,
    pub description: Option<String>,
    pub kind: GoalKind,
    pub target_value: u32,
    pub current_value: u32,
    pub unit: String,
    pub deadline: Option<NaiveDate>,
    pub priority: Priority,
    pub status: GoalStatus,
    pub created_at: DateTime<Utc>,
    pub milestones: Vec<GoalMilestone>,
}

/// A sub-threshold checkpoint within a goal. Stamped automatically on
/// first crossing; still markable by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalMilestone {
    pub threshold: u32,
    pub label: String,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}
