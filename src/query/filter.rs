//! Customer filter fragments
//!
//! Each supplied fragment is a case-insensitive substring test on one
//! text attribute. Fragments combine with AND; absent fragments impose no
//! constraint.

use serde::{Deserialize, Serialize};

use crate::store::Customer;

/// A set of optional filter fragments combined with AND logic
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub city: Option<String>,
}

impl CustomerFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, fragment: impl Into<String>) -> Self {
        self.first_name = Some(fragment.into());
        self
    }

    pub fn last_name(mut self, fragment: impl Into<String>) -> Self {
        self.last_name = Some(fragment.into());
        self
    }

    pub fn city(mut self, fragment: impl Into<String>) -> Self {
        self.city = Some(fragment.into());
        self
    }

    /// Check if a customer matches every supplied fragment
    pub fn matches(&self, customer: &Customer) -> bool {
        contains_fragment(&customer.first_name, self.first_name.as_deref())
            && contains_fragment(&customer.last_name, self.last_name.as_deref())
            && contains_fragment(&customer.city, self.city.as_deref())
    }
}

/// Case-insensitive substring test; an absent fragment always matches
fn contains_fragment(value: &str, fragment: Option<&str>) -> bool {
    match fragment {
        None => true,
        Some(fragment) => value.to_lowercase().contains(&fragment.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jo() -> Customer {
        Customer::new(1, "Jo", "Do", "Reno", "Acme")
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(CustomerFilter::new().matches(&jo()));
    }

    #[test]
    fn test_case_insensitive_substring() {
        assert!(CustomerFilter::new().city("ren").matches(&jo()));
        assert!(CustomerFilter::new().city("ENO").matches(&jo()));
        assert!(!CustomerFilter::new().city("paris").matches(&jo()));
    }

    #[test]
    fn test_empty_fragment_matches() {
        assert!(CustomerFilter::new().first_name("").matches(&jo()));
    }

    #[test]
    fn test_fragments_combine_with_and() {
        let filter = CustomerFilter::new().first_name("j").last_name("d");
        assert!(filter.matches(&jo()));

        let filter = CustomerFilter::new().first_name("j").last_name("x");
        assert!(!filter.matches(&jo()));
    }

    #[test]
    fn test_company_is_not_filtered() {
        // Only first_name, last_name and city take part in filtering
        let filter = CustomerFilter::new().city("acme");
        assert!(!filter.matches(&jo()));
    }
}
