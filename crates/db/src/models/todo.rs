//! Todo model. Todos belong to a board and are removed with it.

use roomboard_core::entity::Entity;
use roomboard_core::error::CoreError;
use roomboard_core::types::{DbId, Timestamp};
use roomboard_core::validation::{validate_name, validate_priority};
use serde::Serialize;
use sqlx::FromRow;

use crate::record::{MySqlQuery, Record};

/// A row from the `todos` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub done: bool,
    pub priority: i32,
    pub board_id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new todo on a board.
#[derive(Debug, Clone)]
pub struct CreateTodo {
    pub board_id: DbId,
    pub title: String,
    pub done: bool,
    pub priority: i32,
    pub due_date: Option<Timestamp>,
}

/// DTO for replacing a todo's editable fields. The board cannot change.
#[derive(Debug, Clone)]
pub struct UpdateTodo {
    pub title: String,
    pub done: bool,
    pub priority: i32,
    pub due_date: Option<Timestamp>,
}

fn check(title: &str, priority: i32) -> Result<(), CoreError> {
    validate_name("title", title)?;
    validate_priority(priority)
}

impl Entity for Todo {
    const NAME: &'static str = "Todo";

    type New = CreateTodo;
    type Changes = UpdateTodo;

    fn id(&self) -> DbId {
        self.id
    }

    fn parent_id(&self) -> Option<DbId> {
        Some(self.board_id)
    }

    fn validate(&self) -> Result<(), CoreError> {
        check(&self.title, self.priority)
    }

    fn validate_new(input: &CreateTodo) -> Result<(), CoreError> {
        check(&input.title, input.priority)
    }

    fn with_changes(&self, changes: UpdateTodo) -> Self {
        Self {
            title: changes.title,
            done: changes.done,
            priority: changes.priority,
            due_date: changes.due_date,
            ..self.clone()
        }
    }
}

impl Record for Todo {
    const TABLE: &'static str = "todos";
    const COLUMNS: &'static str =
        "id, title, done, priority, board_id, due_date, created_at, updated_at";
    const INSERT_COLUMNS: &'static [&'static str] =
        &["title", "done", "priority", "due_date", "board_id"];
    const UPDATE_COLUMNS: &'static [&'static str] = &["title", "done", "priority", "due_date"];
    const PARENT_COLUMN: Option<&'static str> = Some("board_id");

    fn bind_insert<'q>(input: &'q CreateTodo, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query
            .bind(&input.title)
            .bind(input.done)
            .bind(input.priority)
            .bind(input.due_date)
            .bind(input.board_id)
    }

    fn bind_update<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query
            .bind(&self.title)
            .bind(self.done)
            .bind(self.priority)
            .bind(self.due_date)
    }
}
