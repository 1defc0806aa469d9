//! Handlers for boards, nested under `/v1/rooms/{room_id}/boards`.

use axum::extract::State;
use axum::Json;
use roomboard_core::types::DbId;
use roomboard_db::models::board::{Board, CreateBoard, UpdateBoard};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{ApiPath, ValidatedJson};
use crate::response::{BoardList, MessageResponse};
use crate::state::AppState;

/// Request body for creating or updating a board.
#[derive(Debug, Deserialize, Validate)]
pub struct BoardRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[serde(default)]
    pub priority: i32,
}

/// GET /v1/rooms/{room_id}/boards/
pub async fn list_by_room(
    State(state): State<AppState>,
    ApiPath(room_id): ApiPath<DbId>,
) -> AppResult<Json<BoardList>> {
    let boards = state.boards.list_by_parent(room_id).await?;
    Ok(Json(BoardList { boards }))
}

/// POST /v1/rooms/{room_id}/boards/
pub async fn create(
    State(state): State<AppState>,
    ApiPath(room_id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<BoardRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .boards
        .create(CreateBoard {
            name: input.name,
            priority: input.priority,
            room_id,
        })
        .await?;
    Ok(Json(MessageResponse::ok()))
}

/// GET /v1/rooms/{room_id}/boards/{board_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath((_room_id, id)): ApiPath<(DbId, DbId)>,
) -> AppResult<Json<Board>> {
    let board = state.boards.get_by_id(id).await?;
    Ok(Json(board))
}

/// PUT /v1/rooms/{room_id}/boards/{board_id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath((_room_id, id)): ApiPath<(DbId, DbId)>,
    ValidatedJson(input): ValidatedJson<BoardRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .boards
        .update(
            id,
            UpdateBoard {
                name: input.name,
                priority: input.priority,
            },
        )
        .await?;
    Ok(Json(MessageResponse::ok()))
}

/// DELETE /v1/rooms/{room_id}/boards/{board_id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath((_room_id, id)): ApiPath<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    state.boards.delete(id).await?;
    Ok(Json(MessageResponse::ok()))
}
