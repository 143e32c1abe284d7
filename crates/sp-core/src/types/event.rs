use crate::types::goal::StudyGoal;
use crate::types::ids::{GoalId, PathId, SessionId};
use crate::types::path::ActiveStudyPath;
use crate::types::quiz::QuizRecord;
use crate::types::session::StudySession;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum EventBody {
    SessionAdded {
        session: StudySession,
    },
    SessionUpdated {
        session: StudySession,
    },
    SessionDeleted {
        session_id: SessionId,
    },

    GoalAdded {
        goal: StudyGoal,
    },
    GoalUpdated {
        goal: StudyGoal,
    },
    GoalCompleted {
        goal: StudyGoal,
    },
    GoalDeleted {
        goal_id: GoalId,
    },
    MilestoneReached {
        goal_id: GoalId,
        label: String,
    },

    PathStarted {
        path: ActiveStudyPath,
    },
    PathUpdated {
        path: ActiveStudyPath,
    },
    TopicAdvanced {
        path: ActiveStudyPath,
        topic: String,
    },
    PathCompleted {
        path: ActiveStudyPath,
    },

    StudyTimeAdded {
        minutes: u32,
        total_minutes: u32,
    },
    QuizCompleted {
        quiz: QuizRecord,
    },
    AchievementUnlocked {
        achievement_id: String,
        earned_at: DateTime<Utc>,
    },

    DemoModeChanged {
        enabled: bool,
    },
}
