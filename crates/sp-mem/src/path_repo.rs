use crate::store::MemStore;
use sp_core::error::PathError;
use sp_core::paths::PathRepository;
use sp_core::types::{ActiveStudyPath, PathId};

pub struct PathRepo<'a> {
    store: &'a MemStore,
}

impl<'a> PathRepo<'a> {
    pub fn new(store: &'a MemStore) -> Self {
        Self { store }
    }
}

impl PathRepository for PathRepo<'_> {
    fn insert_front(&self, path: ActiveStudyPath) -> Result<ActiveStudyPath, PathError> {
        self.store.lock().paths.insert(0, path.clone());
        Ok(path)
    }

    fn get(&self, id: &PathId) -> Result<Option<ActiveStudyPath>, PathError> {
        Ok(self
            .store
            .lock()
            .paths
            .iter()
            .find(|path| &path.id == id)
            .cloned())
    }

    fn list(&self) -> Result<Vec<ActiveStudyPath>, PathError> {
        Ok(self.store.lock().paths.clone())
    }

    fn replace(&self, path: ActiveStudyPath) -> Result<ActiveStudyPath, PathError> {
        let mut state = self.store.lock();
        let Some(slot) = state.paths.iter_mut().find(|existing| existing.id == path.id) else {
            return Err(PathError::NotFound);
        };
        *slot = path.clone();
        Ok(path)
    }
}
