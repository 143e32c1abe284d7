use crate::store::MemStore;
use sp_core::StudyError;
use sp_core::settings::SettingsRepository;

pub struct SettingsRepo<'a> {
    store: &'a MemStore,
}

impl<'a> SettingsRepo<'a> {
    pub fn new(store: &'a MemStore) -> Self {
        Self { store }
    }
}

impl SettingsRepository for SettingsRepo<'_> {
    fn demo_mode(&self) -> Result<bool, StudyError> {
        Ok(self.store.lock().demo_mode)
    }

    fn set_demo_mode(&self, enabled: bool) -> Result<(), StudyError> {
        self.store.lock().demo_mode = enabled;
        Ok(())
    }
}
