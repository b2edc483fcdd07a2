// rest/mod.rs — Public REST API server.
//
// Axum HTTP server, local only by default.
//
// Endpoints:
//   GET    /
//   GET    /health
//   GET    /info
//   POST   /todos
//   GET    /todos
//   GET    /todos/sorted_by_title
//   GET    /todos/sorted_by_date
//   GET    /todos/search
//   GET    /todos/{id}
//   PUT    /todos/{id}
//   DELETE /todos/{id}

pub mod error;
pub mod routes;

use anyhow::Result;
use axum::{
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::AppContext;

pub async fn start_rest_server(ctx: Arc<AppContext>) -> Result<()> {
    let bind = format!("{}:{}", ctx.config.bind_address, ctx.config.port);
    let addr: SocketAddr = bind.parse()?;

    let router = build_router(ctx);

    info!("REST API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(routes::health::health))
        .route("/info", get(routes::info::info))
        // Todos
        .route(
            "/todos",
            get(routes::todos::list_tasks).post(routes::todos::create_task),
        )
        .route("/todos/sorted_by_title", get(routes::todos::sorted_by_title))
        .route("/todos/sorted_by_date", get(routes::todos::sorted_by_date))
        .route("/todos/search", get(routes::todos::search_by_done))
        .route(
            "/todos/{id}",
            get(routes::todos::get_task)
                .put(routes::todos::update_task)
                .delete(routes::todos::delete_task),
        )
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to the ToDo App!" }))
}
