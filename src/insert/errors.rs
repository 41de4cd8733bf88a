//! Insertion rejection reasons
//!
//! Rejection codes, in pipeline order:
//! - ALL_FIELDS_REQUIRED
//! - ID_NOT_FOUND
//! - INVALID_CITY_OR_COMPANY
//! - DUPLICATE_ID

use thiserror::Error;

/// Result type for insertion
pub type InsertResult<T> = Result<T, InsertRejection>;

/// Why an insertion was refused.
///
/// `Display` yields the exact message surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsertRejection {
    /// A required field is missing or empty
    #[error("All fields are required")]
    AllFieldsRequired,

    /// No stored record carries the payload id
    #[error("Customer with the provided ID does not exist")]
    IdNotFound,

    /// Payload city or company differs from the stored record
    #[error("Invalid city or company")]
    InvalidCityOrCompany,

    /// A stored record already carries the payload id
    #[error("Customer with the provided ID already exists")]
    DuplicateId,
}

impl InsertRejection {
    /// Stable rejection code
    pub fn code(&self) -> &'static str {
        match self {
            InsertRejection::AllFieldsRequired => "ALL_FIELDS_REQUIRED",
            InsertRejection::IdNotFound => "ID_NOT_FOUND",
            InsertRejection::InvalidCityOrCompany => "INVALID_CITY_OR_COMPANY",
            InsertRejection::DuplicateId => "DUPLICATE_ID",
        }
    }
}
