//! Page selection
//!
//! Pages are 1-based. A page request selects `[(page - 1) * limit,
//! page * limit)` of the filtered sequence, clipped to its length. When
//! either parameter is missing or not a positive integer the request is
//! unpaginated and the whole filtered sequence is returned.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Optional page number and page size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl PageRequest {
    /// Build a request; zero counts as missing
    pub fn new(page: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            page: page.filter(|p| *p > 0),
            limit: limit.filter(|l| *l > 0),
        }
    }

    /// A request that returns everything
    pub fn unpaginated() -> Self {
        Self::default()
    }

    /// Parse raw page/limit text. Anything that is not a positive
    /// integer is treated as missing.
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(
            page.and_then(parse_positive),
            limit.and_then(parse_positive),
        )
    }

    /// Index range selected within a sequence of `len` items.
    ///
    /// Zero page or limit counts as missing, however the request was built.
    pub fn range(&self, len: usize) -> Range<usize> {
        match (self.page, self.limit) {
            (Some(page), Some(limit)) if page > 0 && limit > 0 => {
                let start = page.saturating_sub(1).saturating_mul(limit);
                let end = page.saturating_mul(limit);
                clip(start, len)..clip(end, len)
            }
            _ => 0..len,
        }
    }

    /// Select this page out of an owned sequence
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        let range = self.range(items.len());
        items
            .into_iter()
            .skip(range.start)
            .take(range.end - range.start)
            .collect()
    }
}

fn parse_positive(text: &str) -> Option<u64> {
    text.trim().parse::<u64>().ok().filter(|n| *n > 0)
}

fn clip(index: u64, len: usize) -> usize {
    usize::try_from(index).map_or(len, |i| i.min(len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let page = PageRequest::new(Some(1), Some(2));
        assert_eq!(page.range(5), 0..2);
    }

    #[test]
    fn test_last_partial_page() {
        let page = PageRequest::new(Some(3), Some(2));
        assert_eq!(page.range(5), 4..5);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let page = PageRequest::new(Some(4), Some(2));
        assert!(page.range(5).is_empty());
    }

    #[test]
    fn test_missing_parameter_is_unpaginated() {
        assert_eq!(PageRequest::new(Some(2), None).range(5), 0..5);
        assert_eq!(PageRequest::new(None, Some(2)).range(5), 0..5);
    }

    #[test]
    fn test_zero_is_treated_as_missing() {
        let page = PageRequest::new(Some(0), Some(2));
        assert_eq!(page.page, None);
        assert_eq!(page.range(5), 0..5);
    }

    #[test]
    fn test_zero_in_literal_request_is_unpaginated() {
        let page = PageRequest {
            page: Some(1),
            limit: Some(0),
        };
        assert_eq!(page.range(1), 0..1);

        let page: PageRequest = serde_json::from_str(r#"{"page": 0, "limit": 2}"#).unwrap();
        assert_eq!(page.range(3), 0..3);
    }

    #[test]
    fn test_parse_invalid_text() {
        assert_eq!(PageRequest::parse(Some("abc"), Some("2")), PageRequest::new(None, Some(2)));
        assert_eq!(PageRequest::parse(Some("-1"), Some("2")).page, None);
        assert_eq!(PageRequest::parse(Some("1.5"), Some("2")).page, None);
        assert_eq!(PageRequest::parse(Some(" 3 "), Some("2")).page, Some(3));
    }

    #[test]
    fn test_huge_values_saturate() {
        let page = PageRequest::new(Some(u64::MAX), Some(u64::MAX));
        assert!(page.range(10).is_empty());
    }

    #[test]
    fn test_apply() {
        let page = PageRequest::new(Some(2), Some(2));
        assert_eq!(page.apply(vec![1, 2, 3, 4, 5]), vec![3, 4]);
    }
}
