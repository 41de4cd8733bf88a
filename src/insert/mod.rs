//! Insertion Validator
//!
//! Multi-step acceptance pipeline for new customer records. Rejections
//! are values, never panics, and leave the store untouched.

mod errors;
mod payload;
mod validator;

pub use errors::{InsertRejection, InsertResult};
pub use payload::InsertPayload;
pub use validator::{InsertValidator, INSERT_SUCCESS_MESSAGE};
