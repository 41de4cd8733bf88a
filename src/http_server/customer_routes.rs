//! Customer HTTP Routes
//!
//! Endpoints for listing, lookup, city aggregation and insertion.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::insert::{InsertPayload, InsertValidator, INSERT_SUCCESS_MESSAGE};
use crate::query::{CustomerFilter, ListQuery, PageRequest, QueryEngine};
use crate::store::{Customer, RecordStore};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// Customer state shared across handlers
pub struct CustomerState {
    pub store: Arc<RecordStore>,
}

impl CustomerState {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }
}

// ==================
// Request/Response Types
// ==================

/// Query string of `GET /customers`.
///
/// Everything is taken as text so that bad page/limit values degrade to an
/// unpaginated listing instead of failing the request.
#[derive(Debug, Default)]
pub struct ListParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub city: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListParams {
    /// Collect parameters from raw query pairs.
    ///
    /// The first occurrence of a key wins, including across the
    /// `firstName`/`first_name` and `lastName`/`last_name` spellings.
    /// Unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "firstName" | "first_name" => &mut params.first_name,
                "lastName" | "last_name" => &mut params.last_name,
                "city" => &mut params.city,
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Convert into an engine query; empty fragments impose no constraint
    pub fn into_query(self) -> ListQuery {
        let filter = CustomerFilter {
            first_name: self.first_name.filter(|s| !s.is_empty()),
            last_name: self.last_name.filter(|s| !s.is_empty()),
            city: self.city.filter(|s| !s.is_empty()),
        };
        let page = PageRequest::parse(self.page.as_deref(), self.limit.as_deref());
        ListQuery::new(filter, page)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================
// Router
// ==================

pub fn customer_routes(state: Arc<CustomerState>) -> Router {
    Router::new()
        .route("/customers", get(list_customers).post(add_customer))
        .route("/customers/:id", get(get_customer))
        .route("/cities", get(list_cities))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_customers(
    State(state): State<Arc<CustomerState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<Customer>> {
    let query = ListParams::from_pairs(pairs).into_query();
    Json(QueryEngine::new(&state.store).list(&query))
}

async fn get_customer(
    State(state): State<Arc<CustomerState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Customer>> {
    state.store.find(&id).map(Json).ok_or(ApiError::NotFound)
}

async fn list_cities(State(state): State<Arc<CustomerState>>) -> Json<BTreeMap<String, usize>> {
    Json(QueryEngine::new(&state.store).count_by_city())
}

async fn add_customer(
    State(state): State<Arc<CustomerState>>,
    payload: Result<Json<InsertPayload>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(payload) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;

    InsertValidator::new(&state.store).try_insert(payload)?;

    Ok(Json(MessageResponse {
        message: INSERT_SUCCESS_MESSAGE.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_convert_to_query() {
        let params = ListParams {
            first_name: Some("jo".to_string()),
            last_name: Some(String::new()),
            city: None,
            page: Some("2".to_string()),
            limit: Some("x".to_string()),
        };

        let query = params.into_query();
        assert_eq!(query.filter.first_name.as_deref(), Some("jo"));
        assert_eq!(query.filter.last_name, None);
        assert_eq!(query.page, PageRequest::new(Some(2), None));
    }

    #[test]
    fn test_repeated_keys_keep_first() {
        let pairs = [
            ("city", "reno"),
            ("first_name", "jo"),
            ("city", "oslo"),
            ("firstName", "ann"),
            ("page", "1"),
            ("page", "2"),
            ("sort", "id"),
        ]
        .map(|(k, v)| (k.to_string(), v.to_string()));

        let params = ListParams::from_pairs(pairs);
        assert_eq!(params.city.as_deref(), Some("reno"));
        assert_eq!(params.first_name.as_deref(), Some("jo"));
        assert_eq!(params.page.as_deref(), Some("1"));
        assert_eq!(params.last_name, None);
    }

    #[test]
    fn test_router_builds() {
        let state = Arc::new(CustomerState::new(Arc::new(RecordStore::empty())));
        let _router = customer_routes(state);
    }
}
