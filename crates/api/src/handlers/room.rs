//! Handlers for the `/v1/rooms` resource.

use axum::extract::State;
use axum::Json;
use roomboard_core::types::DbId;
use roomboard_db::models::room::{CreateRoom, Room, UpdateRoom};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{ApiPath, ValidatedJson};
use crate::response::{MessageResponse, RoomList};
use crate::state::AppState;

/// Request body for creating or renaming a room.
#[derive(Debug, Deserialize, Validate)]
pub struct RoomRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
}

/// GET /v1/rooms/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<RoomList>> {
    let rooms = state.rooms.get_all().await?;
    Ok(Json(RoomList { rooms }))
}

/// POST /v1/rooms/
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<RoomRequest>,
) -> AppResult<Json<MessageResponse>> {
    state.rooms.create(CreateRoom { name: input.name }).await?;
    Ok(Json(MessageResponse::ok()))
}

/// GET /v1/rooms/{room_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Room>> {
    let room = state.rooms.get_by_id(id).await?;
    Ok(Json(room))
}

/// PUT /v1/rooms/{room_id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<RoomRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .rooms
        .update(id, UpdateRoom { name: input.name })
        .await?;
    Ok(Json(MessageResponse::ok()))
}

/// DELETE /v1/rooms/{room_id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    state.rooms.delete(id).await?;
    Ok(Json(MessageResponse::ok()))
}
