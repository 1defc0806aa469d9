pub mod health;
pub mod room;
pub mod todo;

use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /rooms/                                      list, create
/// /rooms/{room_id}                             get, update, delete
/// /rooms/{room_id}/boards/                     list, create
/// /rooms/{room_id}/boards/{board_id}           get, update, delete
///
/// /boards/{board_id}/todos/                    list, create
/// /boards/{board_id}/todos/{todo_id}           get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(room::router())
        .merge(todo::router())
        .method_not_allowed_fallback(handlers::method_not_allowed)
}
