use crate::store::MemStore;
use sp_core::StudyError;
use sp_core::earned::EarnedRepository;
use sp_core::types::EarnedAchievement;

pub struct EarnedRepo<'a> {
    store: &'a MemStore,
}

impl<'a> EarnedRepo<'a> {
    pub fn new(store: &'a MemStore) -> Self {
        Self { store }
    }
}

impl EarnedRepository for EarnedRepo<'_> {
    fn list(&self) -> Result<Vec<EarnedAchievement>, StudyError> {
        Ok(self.store.lock().earned.clone())
    }

    fn contains(&self, achievement_id: &str) -> Result<bool, StudyError> {
        Ok(self
            .store
            .lock()
            .earned
            .iter()
            .any(|entry| entry.achievement_id == achievement_id))
    }

    fn append(&self, entry: EarnedAchievement) -> Result<bool, StudyError> {
        let mut state = self.store.lock();
        if state
            .earned
            .iter()
            .any(|existing| existing.achievement_id == entry.achievement_id)
        {
            return Ok(false);
        }
        state.earned.push(entry);
        Ok(true)
    }
}
