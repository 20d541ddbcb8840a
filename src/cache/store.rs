//! Identity-keyed, insertion-ordered record store.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::cache::CacheRecord;
use crate::error::{RedialError, Result};

/// Ordered collection of [`CacheRecord`], keyed by record id.
///
/// Insertion order is the display order; duplicate ids are rejected.
/// Membership and replacement are decided by id identity alone, never by
/// field-wise comparison.
///
/// Thread-safe: all access goes through a single exclusive lock, held only
/// for the duration of one operation — never across an encode/decode call.
/// In the host this store is touched from a UI-confined context and a
/// persistence-load context, so mutual exclusion is required even though
/// contention is negligible.
///
/// The store is the unit of persistence: it serializes as the plain
/// ordered record list, which the host saves and loads as an opaque blob
/// at plugin-state scope.
#[derive(Debug, Default)]
pub struct CacheStore {
    records: Mutex<Vec<CacheRecord>>,
}

impl CacheStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    ///
    /// Fails with [`RedialError::DuplicateId`] when the id is already
    /// present, leaving the store unchanged.
    pub fn add(&self, record: CacheRecord) -> Result<()> {
        let mut records = self.lock();
        if records.iter().any(|r| r.id == record.id) {
            return Err(RedialError::DuplicateId(record.id));
        }
        debug!(id = %record.id, name = %record.name, "cache record added");
        records.push(record);
        Ok(())
    }

    /// Look up a record by id, returning an independent copy.
    pub fn get(&self, id: &str) -> Option<CacheRecord> {
        self.lock().iter().find(|r| r.id == id).cloned()
    }

    /// The default entry: first in insertion order, `None` when empty.
    ///
    /// Callers applying default address/version/group to a brand-new
    /// invocation must handle `None` explicitly.
    pub fn default_record(&self) -> Option<CacheRecord> {
        self.lock().first().cloned()
    }

    /// Replace the record sharing `record.id`, preserving its position.
    ///
    /// Fails with [`RedialError::NotFound`] when no such id exists.
    pub fn update(&self, record: CacheRecord) -> Result<()> {
        let mut records = self.lock();
        match records.iter().position(|r| r.id == record.id) {
            Some(idx) => {
                debug!(id = %record.id, name = %record.name, "cache record updated");
                records[idx] = record;
                Ok(())
            }
            None => Err(RedialError::NotFound(record.id)),
        }
    }

    /// Remove the record with the given id. No-op when absent.
    pub fn remove(&self, id: &str) {
        let mut records = self.lock();
        if let Some(idx) = records.iter().position(|r| r.id == id) {
            let removed = records.remove(idx);
            debug!(id = %removed.id, name = %removed.name, "cache record removed");
        }
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Remove all records.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Copy of the full record list, in insertion order.
    pub fn snapshot(&self) -> Vec<CacheRecord> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CacheRecord>> {
        // A poisoned lock only means some caller panicked mid-operation;
        // the record list itself is still consistent.
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Vec<CacheRecord>> for CacheStore {
    fn from(records: Vec<CacheRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

impl Serialize for CacheStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.lock().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CacheStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<CacheRecord>::deserialize(deserializer).map(Self::from)
    }
}
