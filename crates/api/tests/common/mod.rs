#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use roomboard_api::config::ServerConfig;
use roomboard_api::router::build_app;
use roomboard_api::state::AppState;
use roomboard_core::entity::Entity;
use roomboard_core::types::{DbId, Timestamp};
use roomboard_db::models::board::{Board, CreateBoard};
use roomboard_db::models::room::{CreateRoom, Room};
use roomboard_db::models::todo::{CreateTodo, Todo};
use roomboard_db::repositories::Repository;

// ---------------------------------------------------------------------------
// In-memory repository
// ---------------------------------------------------------------------------

/// Builds a stored record from its create DTO.
pub trait Fixture: Entity {
    fn materialize(id: DbId, input: &Self::New, now: Timestamp) -> Self;
}

impl Fixture for Room {
    fn materialize(id: DbId, input: &CreateRoom, now: Timestamp) -> Self {
        Room {
            id,
            name: input.name.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Fixture for Board {
    fn materialize(id: DbId, input: &CreateBoard, now: Timestamp) -> Self {
        Board {
            id,
            name: input.name.clone(),
            priority: input.priority,
            room_id: input.room_id,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Fixture for Todo {
    fn materialize(id: DbId, input: &CreateTodo, now: Timestamp) -> Self {
        Todo {
            id,
            title: input.title.clone(),
            done: input.done,
            priority: input.priority,
            board_id: input.board_id,
            due_date: input.due_date,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A repository call, recorded in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    ListByParent(DbId),
    FindById(DbId),
    Create,
    Update(DbId),
    Delete(DbId),
}

struct Inner<E> {
    rows: Vec<E>,
    next_id: DbId,
    calls: Vec<Call>,
    failing: bool,
}

/// Vec-backed repository with a call log. Ids start at 1.
///
/// With `failing` set every call returns a store error.
pub struct MemoryRepository<E> {
    inner: Mutex<Inner<E>>,
}

impl<E: Fixture> MemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                rows: Vec::new(),
                next_id: 1,
                calls: Vec::new(),
                failing: false,
            }),
        }
    }

    pub fn failing() -> Self {
        let repo = Self::new();
        repo.inner.lock().unwrap().failing = true;
        repo
    }

    /// Insert a row directly, bypassing the call log.
    pub fn seed(&self, input: E::New) -> DbId {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.rows.push(E::materialize(id, &input, fixed_now()));
        id
    }

    pub fn rows(&self) -> Vec<E> {
        self.inner.lock().unwrap().rows.clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// Whether any call other than a read reached the store.
    pub fn was_mutated(&self) -> bool {
        self.calls()
            .iter()
            .any(|c| matches!(c, Call::Create | Call::Update(_) | Call::Delete(_)))
    }

    fn record(&self, call: Call) -> Result<std::sync::MutexGuard<'_, Inner<E>>, sqlx::Error> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(call);
        if inner.failing {
            return Err(sqlx::Error::Protocol("store unavailable".into()));
        }
        Ok(inner)
    }
}

#[async_trait]
impl<E: Fixture> Repository<E> for MemoryRepository<E> {
    async fn list(&self) -> Result<Vec<E>, sqlx::Error> {
        let inner = self.record(Call::List)?;
        Ok(inner.rows.clone())
    }

    async fn list_by_parent(&self, parent_id: DbId) -> Result<Vec<E>, sqlx::Error> {
        let inner = self.record(Call::ListByParent(parent_id))?;
        Ok(inner
            .rows
            .iter()
            .filter(|e| e.parent_id() == Some(parent_id))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<E>, sqlx::Error> {
        let inner = self.record(Call::FindById(id))?;
        Ok(inner.rows.iter().find(|e| e.id() == id).cloned())
    }

    async fn create(&self, input: &E::New) -> Result<DbId, sqlx::Error> {
        let mut inner = self.record(Call::Create)?;
        let id = inner.next_id;
        inner.next_id += 1;
        inner.rows.push(E::materialize(id, input, fixed_now()));
        Ok(id)
    }

    async fn update(&self, entity: &E) -> Result<(), sqlx::Error> {
        let mut inner = self.record(Call::Update(entity.id()))?;
        if let Some(row) = inner.rows.iter_mut().find(|e| e.id() == entity.id()) {
            *row = entity.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: DbId) -> Result<(), sqlx::Error> {
        let mut inner = self.record(Call::Delete(id))?;
        inner.rows.retain(|e| e.id() != id);
        Ok(())
    }
}

pub fn fixed_now() -> Timestamp {
    Utc.with_ymd_and_hms(2025, 4, 1, 12, 0, 0).unwrap()
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Repositories behind a test app, kept for inspection after requests.
pub struct TestRepos {
    pub rooms: Arc<MemoryRepository<Room>>,
    pub boards: Arc<MemoryRepository<Board>>,
    pub todos: Arc<MemoryRepository<Todo>>,
}

impl TestRepos {
    pub fn new() -> Self {
        Self {
            rooms: Arc::new(MemoryRepository::new()),
            boards: Arc::new(MemoryRepository::new()),
            todos: Arc::new(MemoryRepository::new()),
        }
    }

    /// Every repository fails with a store error.
    pub fn failing() -> Self {
        Self {
            rooms: Arc::new(MemoryRepository::failing()),
            boards: Arc::new(MemoryRepository::failing()),
            todos: Arc::new(MemoryRepository::failing()),
        }
    }

    pub fn state(&self) -> AppState {
        AppState::with_repositories(
            self.rooms.clone(),
            self.boards.clone(),
            self.todos.clone(),
        )
    }

    /// Full router with the production middleware stack.
    pub fn app(&self) -> Router {
        build_app(self.state(), &test_config())
    }
}

/// Configuration with every variable at its default.
pub fn test_config() -> ServerConfig {
    ServerConfig::from_lookup(|_| None).unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "POST", uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "PUT", uri, body).await
}

/// Send a raw body with a JSON content type, for malformed payloads.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::delete(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn send_json(app: Router, method: &str, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
