use crate::types::enums::{PathStatus, TopicStatus};
use crate::types::ids::PathId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An in-progress or completed curriculum instance. At most one topic
/// holds [`TopicStatus::Current`]; completed topics precede it in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveStudyPath {
    pub id: PathId,
    pub title: String,
    pub certification: String,
    pub started_at: DateTime<Utc>,
    pub last_accessed_at: DateTime<Utc>,
    pub topics_total: u32,
    pub topics_completed: u32,
    pub current_topic: Option<String>,
    pub estimated_minutes_remaining: u32,
    pub status: PathStatus,
    pub progress_percent: u8,
    pub topics: Vec<Topic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: u32,
    pub title: String,
    pub status: TopicStatus,
}
