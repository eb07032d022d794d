// src/application/history.rs
use crate::application::KeyValueStore;
use crate::constants::{HISTORY_KEY, HISTORY_LIMIT};
use crate::domain::{DomainError, HistoryEntry};
use tracing::{debug, warn};

/// Bounded, most-recent-first log of successful submissions
pub struct HistoryLog<K: KeyValueStore> {
    store: K,
}

impl<K: KeyValueStore> HistoryLog<K> {
    pub fn new(store: K) -> Self {
        Self { store }
    }

    /// Stored entries, newest first. A corrupt document reads as empty.
    pub fn entries(&self) -> Result<Vec<HistoryEntry>, DomainError> {
        let Some(raw) = self.store.get(HISTORY_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable history");
                Ok(Vec::new())
            }
        }
    }

    pub fn record(&mut self, entry: HistoryEntry) -> Result<(), DomainError> {
        let mut entries = self.entries()?;
        entries.insert(0, entry);
        entries.truncate(HISTORY_LIMIT);

        let raw = serde_json::to_string(&entries)
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        self.store.set(HISTORY_KEY, &raw)?;
        debug!(len = entries.len(), "History saved");
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), DomainError> {
        self.store.remove(HISTORY_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::MemoryStore;

    #[test]
    fn given_empty_store_when_listing_then_returns_no_entries() {
        let log = HistoryLog::new(MemoryStore::new());
        assert!(log.entries().unwrap().is_empty());
    }

    #[test]
    fn given_entries_when_recording_then_newest_comes_first() {
        let mut log = HistoryLog::new(MemoryStore::new());

        log.record(HistoryEntry::now("Algebra", "mathematics")).unwrap();
        log.record(HistoryEntry::now("Physics", "science")).unwrap();

        let topics: Vec<_> = log
            .entries()
            .unwrap()
            .into_iter()
            .map(|e| e.topic)
            .collect();
        assert_eq!(topics, vec!["Physics", "Algebra"]);
    }

    #[test]
    fn given_many_submissions_when_recording_then_never_exceeds_limit() {
        let mut log = HistoryLog::new(MemoryStore::new());

        for i in 0..25 {
            log.record(HistoryEntry::now(format!("Topic {i}"), "general"))
                .unwrap();
            assert!(log.entries().unwrap().len() <= HISTORY_LIMIT);
        }

        let entries = log.entries().unwrap();
        assert_eq!(entries.len(), HISTORY_LIMIT);
        assert_eq!(entries[0].topic, "Topic 24");
        assert_eq!(entries[HISTORY_LIMIT - 1].topic, "Topic 15");
    }

    #[test]
    fn given_oversized_stored_list_when_recording_then_truncates_to_limit() {
        let stale: Vec<_> = (0..15)
            .map(|i| HistoryEntry::now(format!("Old {i}"), "general"))
            .collect();
        let store = MemoryStore::new()
            .with_value(HISTORY_KEY, &serde_json::to_string(&stale).unwrap());
        let mut log = HistoryLog::new(store);

        log.record(HistoryEntry::now("New", "general")).unwrap();

        assert_eq!(log.entries().unwrap().len(), HISTORY_LIMIT);
    }

    #[test]
    fn given_corrupt_document_when_listing_then_reads_as_empty() {
        let store = MemoryStore::new().with_value(HISTORY_KEY, "{not json");
        let log = HistoryLog::new(store);

        assert!(log.entries().unwrap().is_empty());
    }

    #[test]
    fn given_history_when_clearing_then_entries_are_gone() {
        let mut log = HistoryLog::new(MemoryStore::new());
        log.record(HistoryEntry::now("Algebra", "mathematics")).unwrap();

        log.clear().unwrap();

        assert!(log.entries().unwrap().is_empty());
    }

    #[test]
    fn given_failing_store_when_recording_then_returns_storage_error() {
        let mut log = HistoryLog::new(MemoryStore::failing());

        let result = log.record(HistoryEntry::now("Algebra", "mathematics"));

        assert!(matches!(result, Err(DomainError::Storage(_))));
    }
}
