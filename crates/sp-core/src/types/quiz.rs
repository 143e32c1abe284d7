use crate::types::enums::Difficulty;
use crate::types::ids::QuizId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable once recorded; aggregation happens over the full history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRecord {
    pub id: QuizId,
    pub certification: String,
    pub difficulty: Difficulty,
    pub score: u32,
    pub question_count: u32,
    pub completed_at: DateTime<Utc>,
    pub seconds_taken: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuizStats {
    pub attempts: u32,
    pub average_score: u32,
    pub best_score: u32,
}
