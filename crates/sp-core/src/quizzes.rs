use crate::error::QuizError;
use crate::types::QuizRecord;

pub trait QuizRepository {
    fn append(&self, record: QuizRecord) -> Result<QuizRecord, QuizError>;
    fn list(&self) -> Result<Vec<QuizRecord>, QuizError>;
}
