//! Route definitions for the `/rooms` resource and its boards.

use axum::routing::get;
use axum::Router;

use crate::handlers::{board, room};
use crate::state::AppState;

/// Routes mounted under `/v1`.
///
/// ```text
/// GET    /rooms/                                  -> list
/// POST   /rooms/                                  -> create
/// GET    /rooms/{room_id}                         -> get_by_id
/// PUT    /rooms/{room_id}                         -> update
/// DELETE /rooms/{room_id}                         -> delete
///
/// GET    /rooms/{room_id}/boards/                 -> list_by_room
/// POST   /rooms/{room_id}/boards/                 -> create
/// GET    /rooms/{room_id}/boards/{board_id}       -> get_by_id
/// PUT    /rooms/{room_id}/boards/{board_id}       -> update
/// DELETE /rooms/{room_id}/boards/{board_id}       -> delete
/// ```
///
/// `/rooms` without the trailing slash is accepted as well.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(room::list).post(room::create))
        .route("/rooms/", get(room::list).post(room::create))
        .route(
            "/rooms/{room_id}",
            get(room::get_by_id).put(room::update).delete(room::delete),
        )
        .route(
            "/rooms/{room_id}/boards/",
            get(board::list_by_room).post(board::create),
        )
        .route(
            "/rooms/{room_id}/boards/{board_id}",
            get(board::get_by_id)
                .put(board::update)
                .delete(board::delete),
        )
}
