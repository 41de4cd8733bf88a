//! Record Store
//!
//! An ordered, in-memory sequence of customer records.
//!
//! # Design Principles
//!
//! - Insertion order is preserved
//! - Linear scan is the only access pattern
//! - Populated once at startup, then append-only
//! - One lock guards the sequence; writers hold it across validate-and-append

mod customer;
mod errors;
mod loader;

use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub use customer::{parse_id, Customer};
pub use errors::{StoreError, StoreResult};
pub use loader::load_customers;

/// Shared, explicitly owned customer collection.
///
/// The store is handed to the query engine and insertion validator by
/// reference; nothing reaches it through a global.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: RwLock<Vec<Customer>>,
}

impl RecordStore {
    /// Create a store holding the given records in order
    pub fn new(records: Vec<Customer>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Create an empty store
    pub fn empty() -> Self {
        Self::default()
    }

    /// Populate a store from a JSON array file
    pub fn load(path: &Path) -> StoreResult<Self> {
        load_customers(path).map(Self::new)
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// First record whose id equals `id`
    pub fn get_by_id(&self, id: i64) -> Option<Customer> {
        self.read().iter().find(|c| c.id == id).cloned()
    }

    /// Look up a record by a caller-supplied identifier string.
    ///
    /// The identifier is parsed with [`parse_id`]; text that does not
    /// parse never matches.
    pub fn find(&self, raw_id: &str) -> Option<Customer> {
        parse_id(raw_id).and_then(|id| self.get_by_id(id))
    }

    /// Copy of the full ordered sequence
    pub fn snapshot(&self) -> Vec<Customer> {
        self.read().clone()
    }

    /// Shared read access.
    ///
    /// Every mutation is a single `push`, so a poisoned lock never exposes
    /// a partially written sequence and is recovered.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Vec<Customer>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Exclusive access for the insertion pipeline
    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Vec<Customer>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}
