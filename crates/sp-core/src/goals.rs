use crate::error::GoalError;
use crate::types::{GoalId, StudyGoal};

pub trait GoalRepository {
    fn insert(&self, goal: StudyGoal) -> Result<StudyGoal, GoalError>;
    fn get(&self, id: &GoalId) -> Result<Option<StudyGoal>, GoalError>;
    fn list(&self) -> Result<Vec<StudyGoal>, GoalError>;
    fn replace(&self, goal: StudyGoal) -> Result<StudyGoal, GoalError>;
    fn remove(&self, id: &GoalId) -> Result<(), GoalError>;
}
