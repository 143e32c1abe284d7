use crate::store::MemStore;
use sp_core::StudyError;
use sp_core::progress::ProgressRepository;
use sp_core::types::ProgressSnapshot;

pub struct ProgressRepo<'a> {
    store: &'a MemStore,
}

impl<'a> ProgressRepo<'a> {
    pub fn new(store: &'a MemStore) -> Self {
        Self { store }
    }
}

impl ProgressRepository for ProgressRepo<'_> {
    fn get(&self) -> Result<ProgressSnapshot, StudyError> {
        Ok(self.store.lock().progress.clone())
    }

    fn put(&self, snapshot: ProgressSnapshot) -> Result<(), StudyError> {
        self.store.lock().progress = snapshot;
        Ok(())
    }
}
