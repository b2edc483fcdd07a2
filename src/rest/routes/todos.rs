// rest/routes/todos.rs — ToDo REST routes.
//
// Thin translation layer: decode the request, call the store, map the
// result. All invariants live in `store`.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::rest::error::store_error_response;
use crate::store::Task;
use crate::AppContext;

#[derive(Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
}

pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<CreateTaskRequest>,
) -> Result<Json<Task>, (StatusCode, Json<Value>)> {
    ctx.store
        .create(body.title, body.description)
        .await
        .map(Json)
        .map_err(store_error_response)
}

pub async fn list_tasks(State(ctx): State<Arc<AppContext>>) -> Json<Vec<Task>> {
    Json(ctx.store.get_all().await)
}

pub async fn sorted_by_title(State(ctx): State<Arc<AppContext>>) -> Json<Vec<Task>> {
    Json(ctx.store.get_sorted_by_title().await)
}

pub async fn sorted_by_date(State(ctx): State<Arc<AppContext>>) -> Json<Vec<Task>> {
    Json(ctx.store.get_sorted_by_date().await)
}

#[derive(Deserialize)]
pub struct SearchQuery {
    /// Completion filter; omitted means pending tasks.
    #[serde(default)]
    pub done: bool,
}

pub async fn search_by_done(
    State(ctx): State<Arc<AppContext>>,
    Query(q): Query<SearchQuery>,
) -> Json<Vec<Task>> {
    Json(ctx.store.get_by_done(q.done).await)
}

pub async fn get_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Task>, (StatusCode, Json<Value>)> {
    ctx.store
        .get_by_id(id)
        .await
        .map(Json)
        .map_err(store_error_response)
}

#[derive(Deserialize)]
pub struct UpdateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub done: bool,
}

pub async fn update_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, (StatusCode, Json<Value>)> {
    ctx.store
        .update(id, body.title, body.description, body.done)
        .await
        .map(Json)
        .map_err(store_error_response)
}

pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    ctx.store
        .delete(id)
        .await
        .map(|_| StatusCode::OK)
        .map_err(store_error_response)
}
