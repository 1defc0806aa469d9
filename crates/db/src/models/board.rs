//! Board model. Boards belong to a room and are removed with it.

use roomboard_core::entity::Entity;
use roomboard_core::error::CoreError;
use roomboard_core::types::{DbId, Timestamp};
use roomboard_core::validation::{validate_name, validate_priority};
use serde::Serialize;
use sqlx::FromRow;

use crate::record::{MySqlQuery, Record};

/// A row from the `boards` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Board {
    pub id: DbId,
    pub name: String,
    pub priority: i32,
    pub room_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new board inside a room.
#[derive(Debug, Clone)]
pub struct CreateBoard {
    pub name: String,
    pub priority: i32,
    pub room_id: DbId,
}

/// DTO for updating a board. The owning room cannot change.
#[derive(Debug, Clone)]
pub struct UpdateBoard {
    pub name: String,
    pub priority: i32,
}

fn check(name: &str, priority: i32) -> Result<(), CoreError> {
    validate_name("name", name)?;
    validate_priority(priority)
}

impl Entity for Board {
    const NAME: &'static str = "Board";

    type New = CreateBoard;
    type Changes = UpdateBoard;

    fn id(&self) -> DbId {
        self.id
    }

    fn parent_id(&self) -> Option<DbId> {
        Some(self.room_id)
    }

    fn validate(&self) -> Result<(), CoreError> {
        check(&self.name, self.priority)
    }

    fn validate_new(input: &CreateBoard) -> Result<(), CoreError> {
        check(&input.name, input.priority)
    }

    fn with_changes(&self, changes: UpdateBoard) -> Self {
        Self {
            name: changes.name,
            priority: changes.priority,
            ..self.clone()
        }
    }
}

impl Record for Board {
    const TABLE: &'static str = "boards";
    const COLUMNS: &'static str = "id, name, priority, room_id, created_at, updated_at";
    const INSERT_COLUMNS: &'static [&'static str] = &["name", "priority", "room_id"];
    const UPDATE_COLUMNS: &'static [&'static str] = &["name", "priority"];
    const PARENT_COLUMN: Option<&'static str> = Some("room_id");

    fn bind_insert<'q>(input: &'q CreateBoard, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query
            .bind(&input.name)
            .bind(input.priority)
            .bind(input.room_id)
    }

    fn bind_update<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query.bind(&self.name).bind(self.priority)
    }
}
