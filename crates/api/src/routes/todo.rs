//! Route definitions for todos, nested under boards.

use axum::routing::get;
use axum::Router;

use crate::handlers::todo;
use crate::state::AppState;

/// Routes mounted under `/v1`.
///
/// ```text
/// GET    /boards/{board_id}/todos/                -> list_by_board
/// POST   /boards/{board_id}/todos/                -> create
/// GET    /boards/{board_id}/todos/{todo_id}       -> get_by_id
/// PUT    /boards/{board_id}/todos/{todo_id}       -> update
/// DELETE /boards/{board_id}/todos/{todo_id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/boards/{board_id}/todos/",
            get(todo::list_by_board).post(todo::create),
        )
        .route(
            "/boards/{board_id}/todos/{todo_id}",
            get(todo::get_by_id).put(todo::update).delete(todo::delete),
        )
}
