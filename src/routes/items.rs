//! Item CRUD routes.

use crate::handlers::items::{create, delete as delete_handler, list, update};
use crate::state::AppState;
use axum::{routing::get, routing::put, Router};

/// GET/POST /api/items and PUT/DELETE /api/items/:id.
pub fn item_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/items", get(list).post(create))
        .route("/api/items/:id", put(update).delete(delete_handler))
        .with_state(state)
}
