//! Handlers for todos, nested under `/v1/boards/{board_id}/todos`.
//!
//! The board id in the path selects the board on create and list. For a
//! single todo it must be numeric but the todo is addressed by its own id.

use axum::extract::State;
use axum::Json;
use roomboard_core::types::{DbId, Timestamp};
use roomboard_db::models::todo::{CreateTodo, Todo, UpdateTodo};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{ApiPath, ValidatedJson};
use crate::response::{MessageResponse, TodoList};
use crate::state::AppState;

/// Request body for creating or replacing a todo.
#[derive(Debug, Deserialize, Validate)]
pub struct TodoRequest {
    #[validate(length(min = 1, max = 50))]
    pub title: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub due_date: Option<Timestamp>,
}

/// GET /v1/boards/{board_id}/todos/
pub async fn list_by_board(
    State(state): State<AppState>,
    ApiPath(board_id): ApiPath<DbId>,
) -> AppResult<Json<TodoList>> {
    let todos = state.todos.list_by_parent(board_id).await?;
    Ok(Json(TodoList { todos }))
}

/// POST /v1/boards/{board_id}/todos/
pub async fn create(
    State(state): State<AppState>,
    ApiPath(board_id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<TodoRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .todos
        .create(CreateTodo {
            board_id,
            title: input.title,
            done: input.done,
            priority: input.priority,
            due_date: input.due_date,
        })
        .await?;
    Ok(Json(MessageResponse::ok()))
}

/// GET /v1/boards/{board_id}/todos/{todo_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath((_board_id, id)): ApiPath<(DbId, DbId)>,
) -> AppResult<Json<Todo>> {
    let todo = state.todos.get_by_id(id).await?;
    Ok(Json(todo))
}

/// PUT /v1/boards/{board_id}/todos/{todo_id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath((_board_id, id)): ApiPath<(DbId, DbId)>,
    ValidatedJson(input): ValidatedJson<TodoRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .todos
        .update(
            id,
            UpdateTodo {
                title: input.title,
                done: input.done,
                priority: input.priority,
                due_date: input.due_date,
            },
        )
        .await?;
    Ok(Json(MessageResponse::ok()))
}

/// DELETE /v1/boards/{board_id}/todos/{todo_id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath((_board_id, id)): ApiPath<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    state.todos.delete(id).await?;
    Ok(Json(MessageResponse::ok()))
}
