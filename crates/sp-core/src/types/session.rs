use crate::types::enums::{Priority, SessionKind};
use crate::types::ids::SessionId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled or logged study block. `start_minute` is minutes from
/// midnight on `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    pub id: SessionId,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub start_minute: u16,
    pub duration_minutes: u32,
    pub kind: SessionKind,
    pub certification: Option<String>,
    pub priority: Priority,
    pub completed: bool,
    pub reminder: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
