use crate::error::StudyError;
use crate::types::ProgressSnapshot;

pub trait ProgressRepository {
    fn get(&self) -> Result<ProgressSnapshot, StudyError>;
    fn put(&self, snapshot: ProgressSnapshot) -> Result<(), StudyError>;
}
