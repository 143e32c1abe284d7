use crate::error::StudyError;
use crate::types::EarnedAchievement;

/// The one-way earned ledger. `append` is the only write and must be a
/// no-op returning `false` when the achievement is already stamped.
pub trait EarnedRepository {
    fn list(&self) -> Result<Vec<EarnedAchievement>, StudyError>;
    fn contains(&self, achievement_id: &str) -> Result<bool, StudyError>;
    fn append(&self, entry: EarnedAchievement) -> Result<bool, StudyError>;
}
