use crate::store::MemStore;
use sp_core::error::GoalError;
use sp_core::goals::GoalRepository;
use sp_core::types::{GoalId, StudyGoal};

pub struct GoalRepo<'a> {
    store: &'a MemStore,
}

impl<'a> GoalRepo<'a> {
    pub fn new(store: &'a MemStore) -> Self {
        Self { store }
    }
}

impl GoalRepository for GoalRepo<'_> {
    fn insert(&self, goal: StudyGoal) -> Result<StudyGoal, GoalError> {
        self.store.lock().goals.push(goal.clone());
        Ok(goal)
    }

    fn get(&self, id: &GoalId) -> Result<Option<StudyGoal>, GoalError> {
        Ok(self
            .store
            .lock()
            .goals
            .iter()
            .find(|goal| &goal.id == id)
            .cloned())
    }

    fn list(&self) -> Result<Vec<StudyGoal>, GoalError> {
        Ok(self.store.lock().goals.clone())
    }

    fn replace(&self, goal: StudyGoal) -> Result<StudyGoal, GoalError> {
        let mut state = self.store.lock();
        let Some(slot) = state.goals.iter_mut().find(|existing| existing.id == goal.id) else {
            return Err(GoalError::NotFound);
        };
        *slot = goal.clone();
        Ok(goal)
    }

    fn remove(&self, id: &GoalId) -> Result<(), GoalError> {
        let mut state = self.store.lock();
        let Some(index) = state.goals.iter().position(|goal| &goal.id == id) else {
            return Err(GoalError::NotFound);
        };
        state.goals.remove(index);
        Ok(())
    }
}
