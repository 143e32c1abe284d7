use crate::store::MemStore;
use sp_core::error::SessionError;
use sp_core::sessions::SessionRepository;
use sp_core::types::{SessionFilter, SessionId, StudySession};

pub struct SessionRepo<'a> {
    store: &'a MemStore,
}

impl<'a> SessionRepo<'a> {
    pub fn new(store: &'a MemStore) -> Self {
        Self { store }
    }
}

impl SessionRepository for SessionRepo<'_> {
    fn insert(&self, session: StudySession) -> Result<StudySession, SessionError> {
        self.store.lock().sessions.push(session.clone());
        Ok(session)
    }

    fn get(&self, id: &SessionId) -> Result<Option<StudySession>, SessionError> {
        Ok(self
            .store
            .lock()
            .sessions
            .iter()
            .find(|session| &session.id == id)
            .cloned())
    }

    fn list(&self, filter: SessionFilter) -> Result<Vec<StudySession>, SessionError> {
        let mut sessions: Vec<StudySession> = self
            .store
            .lock()
            .sessions
            .iter()
            .filter(|session| {
                filter
                    .certification
                    .as_deref()
                    .is_none_or(|cert| session.certification.as_deref() == Some(cert))
            })
            .filter(|session| {
                filter
                    .completed
                    .is_none_or(|completed| session.completed == completed)
            })
            .filter(|session| filter.date.is_none_or(|date| session.date == date))
            .cloned()
            .collect();
        sessions.sort_by_key(|session| (session.date, session.start_minute));
        Ok(sessions)
    }

    fn replace(&self, session: StudySession) -> Result<StudySession, SessionError> {
        let mut state = self.store.lock();
        let Some(slot) = state
            .sessions
            .iter_mut()
            .find(|existing| existing.id == session.id)
        else {
            return Err(SessionError::NotFound);
        };
        *slot = session.clone();
        Ok(session)
    }

    fn remove(&self, id: &SessionId) -> Result<(), SessionError> {
        let mut state = self.store.lock();
        let Some(index) = state.sessions.iter().position(|session| &session.id == id) else {
            return Err(SessionError::NotFound);
        };
        state.sessions.remove(index);
        Ok(())
    }
}
