use crate::store::MemStore;
use sp_core::error::QuizError;
use sp_core::quizzes::QuizRepository;
use sp_core::types::QuizRecord;

pub struct QuizRepo<'a> {
    store: &'a MemStore,
}

impl<'a> QuizRepo<'a> {
    pub fn new(store: &'a MemStore) -> Self {
        Self { store }
    }
}

impl QuizRepository for QuizRepo<'_> {
    fn append(&self, record: QuizRecord) -> Result<QuizRecord, QuizError> {
        self.store.lock().quizzes.push(record.clone());
        Ok(record)
    }

    fn list(&self) -> Result<Vec<QuizRecord>, QuizError> {
        Ok(self.store.lock().quizzes.clone())
    }
}
