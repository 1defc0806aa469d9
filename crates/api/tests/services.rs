//! Service-layer rules tested against the in-memory repository: validation
//! before any store call, not-found probing, and error pass-through.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use common::{Call, MemoryRepository};
use roomboard_api::error::AppError;
use roomboard_api::services::{BoardService, CrudService, RoomService, TodoService};
use roomboard_core::error::CoreError;
use roomboard_db::models::board::{Board, CreateBoard, UpdateBoard};
use roomboard_db::models::room::{CreateRoom, Room, UpdateRoom};
use roomboard_db::models::todo::{CreateTodo, Todo, UpdateTodo};

fn room_service() -> (Arc<MemoryRepository<Room>>, RoomService) {
    let repo = Arc::new(MemoryRepository::<Room>::new());
    (repo.clone(), CrudService::new(repo))
}

fn board_service() -> (Arc<MemoryRepository<Board>>, BoardService) {
    let repo = Arc::new(MemoryRepository::<Board>::new());
    (repo.clone(), CrudService::new(repo))
}

fn todo_service() -> (Arc<MemoryRepository<Todo>>, TodoService) {
    let repo = Arc::new(MemoryRepository::<Todo>::new());
    (repo.clone(), CrudService::new(repo))
}

fn new_todo(board_id: i64, title: &str, priority: i32) -> CreateTodo {
    CreateTodo {
        board_id,
        title: title.into(),
        done: false,
        priority,
        due_date: None,
    }
}

// ---------------------------------------------------------------------------
// Rooms
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_room_returns_new_id() {
    let (repo, service) = room_service();

    let id = service.create(CreateRoom { name: "Kitchen".into() }).await.unwrap();

    assert_eq!(id, 1);
    assert_eq!(repo.rows()[0].name, "Kitchen");
}

#[tokio::test]
async fn create_room_with_empty_name_never_reaches_store() {
    let (repo, service) = room_service();

    let err = service.create(CreateRoom { name: String::new() }).await.unwrap_err();

    assert_matches!(err, AppError::Core(CoreError::Validation(_)));
    assert!(repo.calls().is_empty());
}

#[tokio::test]
async fn create_room_with_51_char_name_never_reaches_store() {
    let (repo, service) = room_service();

    let err = service
        .create(CreateRoom { name: "a".repeat(51) })
        .await
        .unwrap_err();

    assert_matches!(err, AppError::Core(CoreError::Validation(_)));
    assert!(repo.calls().is_empty());
}

#[tokio::test]
async fn create_room_with_50_char_name_succeeds() {
    let (_repo, service) = room_service();

    let id = service.create(CreateRoom { name: "a".repeat(50) }).await.unwrap();

    assert_eq!(service.get_by_id(id).await.unwrap().name.len(), 50);
}

#[tokio::test]
async fn get_missing_room_is_not_found() {
    let (_repo, service) = room_service();

    let err = service.get_by_id(99).await.unwrap_err();

    assert_matches!(
        err,
        AppError::Core(CoreError::NotFound { entity: "Room", id: 99 })
    );
}

#[tokio::test]
async fn update_missing_room_is_not_found_without_writing() {
    let (repo, service) = room_service();

    let err = service
        .update(7, UpdateRoom { name: "Nope".into() })
        .await
        .unwrap_err();

    assert_matches!(err, AppError::Core(CoreError::NotFound { id: 7, .. }));
    assert_eq!(repo.calls(), vec![Call::FindById(7)]);
}

#[tokio::test]
async fn update_room_with_invalid_name_leaves_row_untouched() {
    let (repo, service) = room_service();
    let id = repo.seed(CreateRoom { name: "Office".into() });

    let err = service
        .update(id, UpdateRoom { name: String::new() })
        .await
        .unwrap_err();

    assert_matches!(err, AppError::Core(CoreError::Validation(_)));
    assert!(!repo.was_mutated());
    assert_eq!(repo.rows()[0].name, "Office");
}

#[tokio::test]
async fn update_room_renames() {
    let (repo, service) = room_service();
    let id = repo.seed(CreateRoom { name: "Office".into() });

    service
        .update(id, UpdateRoom { name: "Study".into() })
        .await
        .unwrap();

    assert_eq!(service.get_by_id(id).await.unwrap().name, "Study");
}

#[tokio::test]
async fn delete_missing_room_is_not_found_without_deleting() {
    let (repo, service) = room_service();

    let err = service.delete(3).await.unwrap_err();

    assert_matches!(err, AppError::Core(CoreError::NotFound { id: 3, .. }));
    assert!(!repo.was_mutated());
}

#[tokio::test]
async fn delete_room_removes_it() {
    let (repo, service) = room_service();
    let id = repo.seed(CreateRoom { name: "Garage".into() });

    service.delete(id).await.unwrap();

    assert!(repo.rows().is_empty());
    assert_eq!(repo.calls(), vec![Call::FindById(id), Call::Delete(id)]);
}

#[tokio::test]
async fn store_errors_pass_through() {
    let repo = Arc::new(MemoryRepository::<Room>::failing());
    let service: RoomService = CrudService::new(repo);

    assert_matches!(service.get_all().await, Err(AppError::Database(_)));
    assert_matches!(service.get_by_id(1).await, Err(AppError::Database(_)));
    assert_matches!(
        service.create(CreateRoom { name: "x".into() }).await,
        Err(AppError::Database(_))
    );
}

// ---------------------------------------------------------------------------
// Boards
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_board_keeps_its_room() {
    let (repo, service) = board_service();
    let id = repo.seed(CreateBoard {
        name: "Chores".into(),
        priority: 1,
        room_id: 4,
    });

    service
        .update(
            id,
            UpdateBoard {
                name: "Errands".into(),
                priority: 2,
            },
        )
        .await
        .unwrap();

    let board = service.get_by_id(id).await.unwrap();
    assert_eq!(board.name, "Errands");
    assert_eq!(board.priority, 2);
    assert_eq!(board.room_id, 4);
}

#[tokio::test]
async fn boards_are_listed_per_room() {
    let (repo, service) = board_service();
    repo.seed(CreateBoard { name: "A".into(), priority: 0, room_id: 1 });
    repo.seed(CreateBoard { name: "B".into(), priority: 0, room_id: 2 });
    repo.seed(CreateBoard { name: "C".into(), priority: 0, room_id: 1 });

    let names: Vec<_> = service
        .list_by_parent(1)
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.name)
        .collect();

    assert_eq!(names, ["A", "C"]);
}

#[tokio::test]
async fn create_board_with_negative_priority_is_rejected() {
    let (repo, service) = board_service();

    let err = service
        .create(CreateBoard { name: "A".into(), priority: -1, room_id: 1 })
        .await
        .unwrap_err();

    assert_matches!(err, AppError::Core(CoreError::Validation(_)));
    assert!(repo.calls().is_empty());
}

// ---------------------------------------------------------------------------
// Todos
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_todo_with_empty_title_never_reaches_store() {
    let (repo, service) = todo_service();

    let err = service.create(new_todo(1, "", 0)).await.unwrap_err();

    assert_matches!(err, AppError::Core(CoreError::Validation(ref msg)) if msg.contains("title"));
    assert!(repo.calls().is_empty());
}

#[tokio::test]
async fn create_todo_with_negative_priority_never_reaches_store() {
    let (repo, service) = todo_service();

    let err = service.create(new_todo(1, "Buy milk", -1)).await.unwrap_err();

    assert_matches!(err, AppError::Core(CoreError::Validation(_)));
    assert!(repo.calls().is_empty());
}

#[tokio::test]
async fn create_todo_with_zero_priority_succeeds() {
    let (_repo, service) = todo_service();

    let id = service.create(new_todo(1, "Buy milk", 0)).await.unwrap();

    let todo = service.get_by_id(id).await.unwrap();
    assert_eq!(todo.priority, 0);
    assert_eq!(todo.board_id, 1);
}

#[tokio::test]
async fn update_todo_replaces_fields_and_keeps_board() {
    let (repo, service) = todo_service();
    let id = repo.seed(new_todo(5, "Buy milk", 1));
    let due = common::fixed_now();

    service
        .update(
            id,
            UpdateTodo {
                title: "Buy oat milk".into(),
                done: true,
                priority: 3,
                due_date: Some(due),
            },
        )
        .await
        .unwrap();

    let todo = service.get_by_id(id).await.unwrap();
    assert_eq!(todo.title, "Buy oat milk");
    assert!(todo.done);
    assert_eq!(todo.priority, 3);
    assert_eq!(todo.due_date, Some(due));
    assert_eq!(todo.board_id, 5);
}

#[tokio::test]
async fn update_todo_with_invalid_title_does_not_write() {
    let (repo, service) = todo_service();
    let id = repo.seed(new_todo(1, "Buy milk", 1));

    let err = service
        .update(
            id,
            UpdateTodo {
                title: "x".repeat(51),
                done: false,
                priority: 1,
                due_date: None,
            },
        )
        .await
        .unwrap_err();

    assert_matches!(err, AppError::Core(CoreError::Validation(_)));
    assert!(!repo.was_mutated());
}

#[tokio::test]
async fn delete_missing_todo_is_not_found() {
    let (repo, service) = todo_service();

    assert_matches!(
        service.delete(42).await,
        Err(AppError::Core(CoreError::NotFound { entity: "Todo", id: 42 }))
    );
    assert!(!repo.was_mutated());
}
