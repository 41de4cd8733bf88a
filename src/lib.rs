//! custdb - An in-memory customer record query service
//!
//! The core is the query-and-validation engine: filter-then-paginate
//! listing, city aggregation, and the ordered insertion pipeline, all over
//! an explicitly owned [`store::RecordStore`].

pub mod cli;
pub mod http_server;
pub mod insert;
pub mod query;
pub mod store;
