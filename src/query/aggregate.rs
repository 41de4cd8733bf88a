//! City aggregation

use std::collections::BTreeMap;

use crate::store::Customer;

/// Count records per exact, case-sensitive city value
pub fn count_by_city<'a>(
    customers: impl IntoIterator<Item = &'a Customer>,
) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for customer in customers {
        *counts.entry(customer.city.clone()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_are_case_sensitive() {
        let customers = vec![
            Customer::new(1, "A", "A", "Reno", "X"),
            Customer::new(2, "B", "B", "reno", "X"),
            Customer::new(3, "C", "C", "Reno", "X"),
        ];

        let counts = count_by_city(&customers);
        assert_eq!(counts["Reno"], 2);
        assert_eq!(counts["reno"], 1);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(count_by_city(&Vec::<Customer>::new()).is_empty());
    }
}
