//! Data file loader
//!
//! Reads the initial record set from a JSON array on disk. File order
//! becomes store order.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::customer::Customer;
use super::errors::{StoreError, StoreResult};

/// Load customer records from a JSON array file.
///
/// Duplicate ids are kept and reported as warnings; lookups return the
/// first occurrence.
pub fn load_customers(path: &Path) -> StoreResult<Vec<Customer>> {
    let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let customers: Vec<Customer> =
        serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut seen = HashSet::with_capacity(customers.len());
    for customer in &customers {
        if !seen.insert(customer.id) {
            tracing::warn!(id = customer.id, path = %path.display(), "duplicate customer id in data file");
        }
    }

    tracing::info!(records = customers.len(), path = %path.display(), "customer data loaded");
    Ok(customers)
}
