use crate::error::StudyError;

pub trait SettingsRepository {
    fn demo_mode(&self) -> Result<bool, StudyError>;
    fn set_demo_mode(&self, enabled: bool) -> Result<(), StudyError>;
}
