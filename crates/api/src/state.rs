use std::sync::Arc;

use roomboard_db::models::board::Board;
use roomboard_db::models::room::Room;
use roomboard_db::models::todo::Todo;
use roomboard_db::repositories::{BoardRepo, Repository, RoomRepo, TodoRepo};
use roomboard_db::DbPool;

use crate::services::{BoardService, CrudService, RoomService, TodoService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (every service holds its repository behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    pub rooms: RoomService,
    pub boards: BoardService,
    pub todos: TodoService,
}

impl AppState {
    /// Wire repository → service for every resource over one shared pool.
    pub fn new(pool: DbPool) -> Self {
        Self::with_repositories(
            Arc::new(RoomRepo::new(pool.clone())),
            Arc::new(BoardRepo::new(pool.clone())),
            Arc::new(TodoRepo::new(pool)),
        )
    }

    /// Build the state from arbitrary repository implementations.
    pub fn with_repositories(
        rooms: Arc<dyn Repository<Room>>,
        boards: Arc<dyn Repository<Board>>,
        todos: Arc<dyn Repository<Todo>>,
    ) -> Self {
        Self {
            rooms: CrudService::new(rooms),
            boards: CrudService::new(boards),
            todos: CrudService::new(todos),
        }
    }
}
