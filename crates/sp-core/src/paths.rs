use crate::error::PathError;
use crate::types::{ActiveStudyPath, PathId};

pub trait PathRepository {
    /// Prepends so the most recently started path lists first.
    fn insert_front(&self, path: ActiveStudyPath) -> Result<ActiveStudyPath, PathError>;
    fn get(&self, id: &PathId) -> Result<Option<ActiveStudyPath>, PathError>;
    fn list(&self) -> Result<Vec<ActiveStudyPath>, PathError>;
    fn replace(&self, path: ActiveStudyPath) -> Result<ActiveStudyPath, PathError>;
}
