//! Storage seam for validated leases
//!
//! The validation pipeline never touches storage. Callers hand a finished
//! [`LeaseRecord`] to whichever [`LeaseStore`] they were configured with.

use std::sync::Mutex;

use crate::error::StorageError;
use crate::types::{LeaseId, LeaseRecord};

/// Destination for validated lease records
pub trait LeaseStore: Send + Sync {
    /// Persist a record and return the identifier it was stored under
    fn save(&self, record: &LeaseRecord) -> Result<LeaseId, StorageError>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Keeps records in process memory
#[derive(Debug, Default)]
pub struct InMemoryLeaseStore {
    records: Mutex<Vec<(LeaseId, LeaseRecord)>>,
    capacity: Option<usize>,
}

impl InMemoryLeaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that refuses writes once `capacity` records are held
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Mutex::new(Vec::with_capacity(capacity)),
            capacity: Some(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: &LeaseId) -> Option<LeaseRecord> {
        let records = self.records.lock().ok()?;
        records
            .iter()
            .find(|(stored_id, _)| stored_id == id)
            .map(|(_, record)| record.clone())
    }
}

impl LeaseStore for InMemoryLeaseStore {
    fn save(&self, record: &LeaseRecord) -> Result<LeaseId, StorageError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| StorageError::Unavailable("lease store lock poisoned".into()))?;

        if let Some(capacity) = self.capacity {
            if records.len() >= capacity {
                return Err(StorageError::CapacityExceeded(capacity));
            }
        }

        let id = LeaseId::new();
        records.push((id, record.clone()));
        Ok(id)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

/// Issues ids and keeps nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingLeaseStore;

impl LeaseStore for LoggingLeaseStore {
    fn save(&self, record: &LeaseRecord) -> Result<LeaseId, StorageError> {
        let id = LeaseId::new();
        tracing::debug!(lease_id = %id, name = %record.name, "Lease record not retained");
        Ok(id)
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> LeaseRecord {
        LeaseRecord {
            name: "Jane Roe".into(),
            building_name: "Harbor Heights".into(),
            flat_number: "12".into(),
            tower_no: "C".into(),
            lease_start_date: "2024-06-01T00:00:00.000Z".into(),
            lease_end_date: "2025-05-31T00:00:00.000Z".into(),
            monthly_lease_amount: 1800.0,
        }
    }

    #[test]
    fn test_in_memory_save_and_get() {
        let store = InMemoryLeaseStore::new();
        assert!(store.is_empty());

        let id = store.save(&sample_record()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id), Some(sample_record()));
        assert_eq!(store.get(&LeaseId::new()), None);
    }

    #[test]
    fn test_duplicate_submissions_get_distinct_ids() {
        let store = InMemoryLeaseStore::new();
        let first = store.save(&sample_record()).unwrap();
        let second = store.save(&sample_record()).unwrap();
        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_capacity_limit() {
        let store = InMemoryLeaseStore::with_capacity(1);
        store.save(&sample_record()).unwrap();
        assert_eq!(
            store.save(&sample_record()),
            Err(StorageError::CapacityExceeded(1))
        );
    }

    #[test]
    fn test_logging_store_issues_ids() {
        let store = LoggingLeaseStore;
        let a = store.save(&sample_record()).unwrap();
        let b = store.save(&sample_record()).unwrap();
        assert_ne!(a, b);
        assert_eq!(store.name(), "log");
    }
}
