use crate::error::StudyError;
use sp_events::types::EventRecord;

pub trait EventRepository {
    fn append(&self, event: EventRecord) -> Result<EventRecord, StudyError>;
    fn list(
        &self,
        after: Option<i64>,
        limit: Option<u32>,
    ) -> Result<Vec<EventRecord>, StudyError>;
    fn replay(
        &self,
        after: Option<i64>,
        limit: Option<u32>,
    ) -> Result<Vec<EventRecord>, StudyError>;
}
