use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The aggregate every dashboard reads. Recomputed inside the mutation
/// that changes its inputs, never lazily.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub total_study_minutes: u32,
    pub quizzes_completed: u32,
    pub average_score: u32,
    pub streak_days: u32,
    pub certifications: BTreeMap<String, CertProgress>,
    pub trend: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CertProgress {
    pub percent: u8,
    pub topics_completed: u32,
    pub topics_total: u32,
}

/// One day in the trend series. `score` is the integer mean of that
/// day's quiz scores, absent on days without a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub score: Option<u32>,
    pub study_minutes: u32,
}
