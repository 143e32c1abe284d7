use crate::StudyError;
use crate::earned::EarnedRepository;
use crate::events::EventRepository;
use crate::goals::GoalRepository;
use crate::paths::PathRepository;
use crate::progress::ProgressRepository;
use crate::quizzes::QuizRepository;
use crate::sessions::SessionRepository;
use crate::settings::SettingsRepository;

pub trait Store {
    type Sessions<'a>: SessionRepository
    where
        Self: 'a;
    type Goals<'a>: GoalRepository
    where
        Self: 'a;
    type Paths<'a>: PathRepository
    where
        Self: 'a;
    type Quizzes<'a>: QuizRepository
    where
        Self: 'a;
    type Progress<'a>: ProgressRepository
    where
        Self: 'a;
    type Earned<'a>: EarnedRepository
    where
        Self: 'a;
    type Events<'a>: EventRepository
    where
        Self: 'a;
    type Settings<'a>: SettingsRepository
    where
        Self: 'a;

    fn sessions(&self) -> Self::Sessions<'_>;
    fn goals(&self) -> Self::Goals<'_>;
    fn paths(&self) -> Self::Paths<'_>;
    fn quizzes(&self) -> Self::Quizzes<'_>;
    fn progress(&self) -> Self::Progress<'_>;
    fn earned(&self) -> Self::Earned<'_>;
    fn events(&self) -> Self::Events<'_>;
    fn settings(&self) -> Self::Settings<'_>;

    /// Runs `f` atomically: every write it performs is kept on `Ok` and
    /// discarded on `Err`.
    fn with_tx<F, T>(&self, f: F) -> Result<T, StudyError>
    where
        F: FnOnce(&Self) -> Result<T, StudyError>;
}
