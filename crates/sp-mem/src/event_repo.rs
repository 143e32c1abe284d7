use crate::store::MemStore;
use sp_core::StudyError;
use sp_core::events::EventRepository;
use sp_core::types::EventId;
use sp_events::types::EventRecord;

pub struct EventRepo<'a> {
    store: &'a MemStore,
}

impl<'a> EventRepo<'a> {
    pub fn new(store: &'a MemStore) -> Self {
        Self { store }
    }

    fn select(
        &self,
        after: Option<i64>,
        limit: Option<u32>,
    ) -> Result<Vec<EventRecord>, StudyError> {
        let state = self.store.lock();
        let records = state
            .events
            .iter()
            .filter(|record| after.is_none_or(|seq| record.seq > seq))
            .take(limit.map_or(usize::MAX, |limit| limit as usize))
            .cloned()
            .collect();
        Ok(records)
    }
}

impl EventRepository for EventRepo<'_> {
    fn append(&self, mut event: EventRecord) -> Result<EventRecord, StudyError> {
        let mut state = self.store.lock();
        state.next_seq += 1;
        event.seq = state.next_seq;
        event.id = EventId::generate().to_string();
        state.events.push(event.clone());
        Ok(event)
    }

    fn list(
        &self,
        after: Option<i64>,
        limit: Option<u32>,
    ) -> Result<Vec<EventRecord>, StudyError> {
        self.select(after, limit)
    }

    // Identical to list here: the in-memory log never compacts, so a
    // replay is just a read from the requested sequence.
    fn replay(
        &self,
        after: Option<i64>,
        limit: Option<u32>,
    ) -> Result<Vec<EventRecord>, StudyError> {
        self.select(after, limit)
    }
}
