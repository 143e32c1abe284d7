use crate::error::SessionError;
use crate::types::{SessionFilter, SessionId, StudySession};

pub trait SessionRepository {
    fn insert(&self, session: StudySession) -> Result<StudySession, SessionError>;
    fn get(&self, id: &SessionId) -> Result<Option<StudySession>, SessionError>;
    fn list(&self, filter: SessionFilter) -> Result<Vec<StudySession>, SessionError>;
    /// Replaces the stored record wholesale; `NotFound` if the id is unknown.
    fn replace(&self, session: StudySession) -> Result<StudySession, SessionError>;
    fn remove(&self, id: &SessionId) -> Result<(), SessionError>;
}
