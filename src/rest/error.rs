// rest/error.rs — store error → HTTP response mapping.

use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::store::StoreError;

/// Map a store failure to the wire shape every route returns on error:
/// a status code plus `{"detail": "<message>"}`.
///
/// `InvalidTitle` → 422, `DuplicateTitle` → 400, `NotFound` → 404.
pub fn store_error_response(err: StoreError) -> (StatusCode, Json<Value>) {
    let status = match err {
        StoreError::InvalidTitle(_) => StatusCode::UNPROCESSABLE_ENTITY,
        StoreError::DuplicateTitle(_) => StatusCode::BAD_REQUEST,
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
    };
    (status, Json(json!({ "detail": err.to_string() })))
}
