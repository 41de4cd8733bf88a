//! # custdb HTTP Server Module
//!
//! Thin axum transport over the query engine and insertion validator.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /customers` - Filtered, paginated listing
//! - `GET /customers/:id` - Single-record lookup
//! - `GET /cities` - Record count per city
//! - `POST /customers` - Validated insertion

pub mod config;
pub mod customer_routes;
pub mod errors;
pub mod health_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use customer_routes::{CustomerState, ListParams, MessageResponse};
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
