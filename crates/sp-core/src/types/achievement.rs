use crate::types::enums::{AchievementCategory, Rarity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// View record produced by the rule engine, merged with the earned
/// ledger before display. `progress`/`max_progress` drive the bar shown
/// for locked achievements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: AchievementCategory,
    pub rarity: Rarity,
    pub points: u32,
    pub earned: bool,
    pub progress: u32,
    pub max_progress: u32,
    pub earned_at: Option<DateTime<Utc>>,
}

/// Append-only ledger entry, written once on first threshold crossing.
/// A later metric drop never removes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarnedAchievement {
    pub achievement_id: String,
    pub earned_at: DateTime<Utc>,
}
