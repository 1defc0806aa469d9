//! Shared response envelope types for API handlers.
//!
//! Mutations and errors answer with `{ "message": ... }`; list endpoints
//! wrap their items under the plural resource name. Lists are always
//! serialized as arrays, never `null`.

use axum::http::StatusCode;
use roomboard_db::models::board::Board;
use roomboard_db::models::room::Room;
use roomboard_db::models::todo::Todo;
use serde::Serialize;

/// Standard `{ "message": ... }` body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    /// `{ "message": "OK" }`, returned by successful mutations.
    pub fn ok() -> Self {
        Self { message: "OK" }
    }

    /// Body carrying the canonical reason phrase of `status`.
    pub fn for_status(status: StatusCode) -> Self {
        Self {
            message: status.canonical_reason().unwrap_or("Unknown Status"),
        }
    }
}

/// `{ "rooms": [...] }`
#[derive(Debug, Serialize)]
pub struct RoomList {
    pub rooms: Vec<Room>,
}

/// `{ "boards": [...] }`
#[derive(Debug, Serialize)]
pub struct BoardList {
    pub boards: Vec<Board>,
}

/// `{ "todos": [...] }`
#[derive(Debug, Serialize)]
pub struct TodoList {
    pub todos: Vec<Todo>,
}
