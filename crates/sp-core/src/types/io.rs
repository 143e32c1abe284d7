use crate::types::enums::{Difficulty, GoalKind, GoalStatus, PathStatus, Priority, SessionKind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSessionInput {
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub start_minute: u16,
    pub duration_minutes: u32,
    pub kind: SessionKind,
    pub certification: Option<String>,
    pub priority: Option<Priority>,
    pub reminder: bool,
}

/// Field-wise patch; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSessionInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_minute: Option<u16>,
    pub duration_minutes: Option<u32>,
    pub kind: Option<SessionKind>,
    pub certification: Option<String>,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
    pub reminder: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFilter {
    pub certification: Option<String>,
    pub completed: Option<bool>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGoalInput {
    pub title: String,
    pub description: Option<String>,
    pub kind: GoalKind,
    pub target_value: u32,
    pub unit: String,
    pub deadline: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub milestones: Vec<MilestoneInput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneInput {
    pub threshold: u32,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateGoalInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub target_value: Option<u32>,
    pub current_value: Option<u32>,
    pub unit: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub status: Option<GoalStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartPathInput {
    pub title: String,
    pub certification: String,
    pub topics: Vec<String>,
    pub estimated_minutes_remaining: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePathInput {
    pub status: Option<PathStatus>,
    pub estimated_minutes_remaining: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompleteQuizInput {
    pub certification: String,
    pub difficulty: Difficulty,
    pub score: u32,
    pub question_count: u32,
    pub seconds_taken: Option<u32>,
}
