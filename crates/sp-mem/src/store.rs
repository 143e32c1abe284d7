use crate::earned_repo::EarnedRepo;
use crate::event_repo::EventRepo;
use crate::goal_repo::GoalRepo;
use crate::path_repo::PathRepo;
use crate::progress_repo::ProgressRepo;
use crate::quiz_repo::QuizRepo;
use crate::session_repo::SessionRepo;
use crate::settings_repo::SettingsRepo;
use sp_core::StudyError;
use sp_core::store::Store;
use sp_core::types::{
    ActiveStudyPath, EarnedAchievement, ProgressSnapshot, QuizRecord, StudyGoal, StudySession,
};
use sp_events::types::EventRecord;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// The entire simulated backend. Lives exactly as long as the process;
/// nothing is ever written to disk.
#[derive(Debug, Default, Clone)]
pub struct MemState {
    pub sessions: Vec<StudySession>,
    pub goals: Vec<StudyGoal>,
    pub paths: Vec<ActiveStudyPath>,
    pub quizzes: Vec<QuizRecord>,
    pub earned: Vec<EarnedAchievement>,
    pub events: Vec<EventRecord>,
    pub next_seq: i64,
    pub progress: ProgressSnapshot,
    pub demo_mode: bool,
}

#[derive(Debug, Default)]
pub struct MemStore {
    state: Mutex<MemState>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: MemState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, MemState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Store for MemStore {
    type Sessions<'a>
        = SessionRepo<'a>
    where
        Self: 'a;
    type Goals<'a>
        = GoalRepo<'a>
    where
        Self: 'a;
    type Paths<'a>
        = PathRepo<'a>
    where
        Self: 'a;
    type Quizzes<'a>
        = QuizRepo<'a>
    where
        Self: 'a;
    type Progress<'a>
        = ProgressRepo<'a>
    where
        Self: 'a;
    type Earned<'a>
        = EarnedRepo<'a>
    where
        Self: 'a;
    type Events<'a>
        = EventRepo<'a>
    where
        Self: 'a;
    type Settings<'a>
        = SettingsRepo<'a>
    where
        Self: 'a;

    fn sessions(&self) -> Self::Sessions<'_> {
        SessionRepo::new(self)
    }

    fn goals(&self) -> Self::Goals<'_> {
        GoalRepo::new(self)
    }

    fn paths(&self) -> Self::Paths<'_> {
        PathRepo::new(self)
    }

    fn quizzes(&self) -> Self::Quizzes<'_> {
        QuizRepo::new(self)
    }

    fn progress(&self) -> Self::Progress<'_> {
        ProgressRepo::new(self)
    }

    fn earned(&self) -> Self::Earned<'_> {
        EarnedRepo::new(self)
    }

    fn events(&self) -> Self::Events<'_> {
        EventRepo::new(self)
    }

    fn settings(&self) -> Self::Settings<'_> {
        SettingsRepo::new(self)
    }

    /// Snapshot-rollback transaction: the state is cloned up front and
    /// restored wholesale when the closure errs, so partial writes never
    /// survive.
    fn with_tx<F, T>(&self, f: F) -> Result<T, StudyError>
    where
        F: FnOnce(&Self) -> Result<T, StudyError>,
    {
        let snapshot = self.lock().clone();
        match f(self) {
            Ok(value) => Ok(value),
            Err(err) => {
                *self.lock() = snapshot;
                Err(err)
            }
        }
    }
}
