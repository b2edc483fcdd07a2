// rest/routes/info.rs — GET /info (application settings echo).

use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::AppContext;

pub async fn info(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    Json(json!({
        "app_name": ctx.config.app_name,
        "debug": ctx.config.debug,
    }))
}
