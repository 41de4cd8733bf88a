//! Insertion validator
//!
//! Rules are evaluated in strict order; the first failure wins:
//! 1. Completeness (ALL_FIELDS_REQUIRED)
//! 2. Existence (ID_NOT_FOUND)
//! 3. Immutable city/company (INVALID_CITY_OR_COMPANY)
//! 4. Uniqueness (DUPLICATE_ID)
//! 5. Accept: append to the end of the store
//!
//! Rule 2 requires a record with the id to exist and rule 4 rejects when
//! one does, so a payload that passes rule 3 is always rejected by rule 4.
//! Both rules are kept exactly as stated.

use crate::store::{Customer, RecordStore};

use super::errors::{InsertRejection, InsertResult};
use super::payload::InsertPayload;

/// Acknowledgment returned on a successful insertion
pub const INSERT_SUCCESS_MESSAGE: &str = "Customer added successfully";

/// Validates candidate records against a borrowed store and appends the
/// ones that pass.
pub struct InsertValidator<'a> {
    store: &'a RecordStore,
}

impl<'a> InsertValidator<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Run the pipeline and append on success.
    ///
    /// The store's write lock is held from the first check through the
    /// append, so concurrent inserts for the same id are serialized.
    pub fn try_insert(&self, payload: InsertPayload) -> InsertResult<()> {
        let mut records = self.store.write();

        match check(&records, payload) {
            Ok(customer) => {
                tracing::info!(id = customer.id, "customer inserted");
                records.push(customer);
                Ok(())
            }
            Err((rejection, id)) => {
                tracing::info!(code = rejection.code(), id = ?id, "customer insert rejected");
                Err(rejection)
            }
        }
    }
}

/// Evaluate every rule against the current sequence.
///
/// On rejection the parsed payload id, if any, is returned for logging.
fn check(
    records: &[Customer],
    payload: InsertPayload,
) -> Result<Customer, (InsertRejection, Option<i64>)> {
    let id = payload.parsed_id();

    if !payload.is_complete() {
        return Err((InsertRejection::AllFieldsRequired, id));
    }

    let existing = id
        .and_then(|id| records.iter().find(|c| c.id == id))
        .ok_or((InsertRejection::IdNotFound, id))?;

    if payload.city() != Some(existing.city.as_str())
        || payload.company() != Some(existing.company.as_str())
    {
        return Err((InsertRejection::InvalidCityOrCompany, id));
    }

    if records.iter().any(|c| Some(c.id) == id) {
        return Err((InsertRejection::DuplicateId, id));
    }

    payload
        .into_customer()
        .ok_or((InsertRejection::AllFieldsRequired, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RecordStore {
        RecordStore::new(vec![Customer::new(1, "Jo", "Do", "Reno", "Acme")])
    }

    #[test]
    fn test_missing_field_wins_over_everything() {
        let store = store();
        let mut payload = InsertPayload::new(99, "A", "B", "Nowhere", "None");
        payload.company = serde_json::Value::Null;

        let result = InsertValidator::new(&store).try_insert(payload);
        assert_eq!(result, Err(InsertRejection::AllFieldsRequired));
    }

    #[test]
    fn test_unknown_id() {
        let store = store();
        let result =
            InsertValidator::new(&store).try_insert(InsertPayload::new(2, "A", "B", "Reno", "Acme"));
        assert_eq!(result, Err(InsertRejection::IdNotFound));
    }

    #[test]
    fn test_unparsable_id_is_not_found() {
        let store = store();
        let result = InsertValidator::new(&store)
            .try_insert(InsertPayload::new("abc", "A", "B", "Reno", "Acme"));
        assert_eq!(result, Err(InsertRejection::IdNotFound));
    }

    #[test]
    fn test_city_mismatch() {
        let store = store();
        let result =
            InsertValidator::new(&store).try_insert(InsertPayload::new(1, "A", "B", "reno", "Acme"));
        assert_eq!(result, Err(InsertRejection::InvalidCityOrCompany));
    }

    #[test]
    fn test_company_mismatch() {
        let store = store();
        let result =
            InsertValidator::new(&store).try_insert(InsertPayload::new(1, "A", "B", "Reno", "Other"));
        assert_eq!(result, Err(InsertRejection::InvalidCityOrCompany));
    }

    #[test]
    fn test_consistent_payload_hits_uniqueness_rule() {
        let store = store();
        let result =
            InsertValidator::new(&store).try_insert(InsertPayload::new(1, "A", "B", "Reno", "Acme"));
        assert_eq!(result, Err(InsertRejection::DuplicateId));
    }

    #[test]
    fn test_rejection_leaves_store_unchanged() {
        let store = store();
        let validator = InsertValidator::new(&store);

        let _ = validator.try_insert(InsertPayload::new(1, "A", "B", "Reno", "Acme"));
        let _ = validator.try_insert(InsertPayload::new(5, "A", "B", "Reno", "Acme"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get_by_id(1).unwrap().first_name, "Jo");
    }

    #[test]
    fn test_check_on_empty_sequence() {
        let result = check(&[], InsertPayload::new(1, "A", "B", "X", "Y"));
        assert_eq!(result.unwrap_err().0, InsertRejection::IdNotFound);
    }
}
