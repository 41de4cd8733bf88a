//! Query Engine
//!
//! Filter-then-paginate listing and city aggregation over the record
//! store. Queries never fail: malformed pagination degrades to an
//! unpaginated listing.

pub mod aggregate;
pub mod filter;
pub mod pagination;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::store::{Customer, RecordStore};

pub use aggregate::count_by_city;
pub use filter::CustomerFilter;
pub use pagination::PageRequest;

/// A listing request: filter fragments plus page selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub filter: CustomerFilter,
    pub page: PageRequest,
}

impl ListQuery {
    pub fn new(filter: CustomerFilter, page: PageRequest) -> Self {
        Self { filter, page }
    }

    /// Filter only, no pagination
    pub fn filtered(filter: CustomerFilter) -> Self {
        Self::new(filter, PageRequest::unpaginated())
    }
}

/// Read-only operations over a borrowed record store
pub struct QueryEngine<'a> {
    store: &'a RecordStore,
}

impl<'a> QueryEngine<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Filtered, paginated listing in store order
    pub fn list(&self, query: &ListQuery) -> Vec<Customer> {
        let records = self.store.read();
        let matching: Vec<&Customer> = records
            .iter()
            .filter(|c| query.filter.matches(c))
            .collect();

        query.page.apply(matching).into_iter().cloned().collect()
    }

    /// Record count per city
    pub fn count_by_city(&self) -> BTreeMap<String, usize> {
        count_by_city(self.store.read().iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_store() -> RecordStore {
        RecordStore::new(vec![Customer::new(1, "Jo", "Do", "Reno", "Acme")])
    }

    #[test]
    fn test_city_fragment_matches() {
        let store = scenario_store();
        let engine = QueryEngine::new(&store);

        let result = engine.list(&ListQuery::filtered(CustomerFilter::new().city("ren")));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn test_unmatched_city_is_empty() {
        let store = scenario_store();
        let engine = QueryEngine::new(&store);

        let result = engine.list(&ListQuery::filtered(CustomerFilter::new().city("paris")));
        assert!(result.is_empty());
    }

    #[test]
    fn test_count_by_city() {
        let store = scenario_store();
        let counts = QueryEngine::new(&store).count_by_city();

        assert_eq!(counts.len(), 1);
        assert_eq!(counts["Reno"], 1);
    }

    #[test]
    fn test_deserialized_zero_page_lists_everything() {
        let store = scenario_store();
        let query: ListQuery =
            serde_json::from_str(r#"{"filter": {}, "page": {"page": 0, "limit": 2}}"#).unwrap();

        assert_eq!(QueryEngine::new(&store).list(&query).len(), 1);
    }

    #[test]
    fn test_pagination_after_filter() {
        let store = RecordStore::new(vec![
            Customer::new(1, "Ann", "A", "Reno", "X"),
            Customer::new(2, "Bob", "B", "Oslo", "X"),
            Customer::new(3, "Ann", "C", "Reno", "X"),
            Customer::new(4, "Ann", "D", "Reno", "X"),
        ]);
        let engine = QueryEngine::new(&store);

        let query = ListQuery::new(
            CustomerFilter::new().first_name("ann"),
            PageRequest::new(Some(2), Some(2)),
        );
        let ids: Vec<i64> = engine.list(&query).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![4]);
    }
}
