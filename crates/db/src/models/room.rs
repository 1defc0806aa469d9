//! Room model.

use roomboard_core::entity::Entity;
use roomboard_core::error::CoreError;
use roomboard_core::types::{DbId, Timestamp};
use roomboard_core::validation::validate_name;
use serde::Serialize;
use sqlx::FromRow;

use crate::record::{MySqlQuery, Record};

/// A row from the `rooms` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Room {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new room.
#[derive(Debug, Clone)]
pub struct CreateRoom {
    pub name: String,
}

/// DTO for renaming a room.
#[derive(Debug, Clone)]
pub struct UpdateRoom {
    pub name: String,
}

impl Entity for Room {
    const NAME: &'static str = "Room";

    type New = CreateRoom;
    type Changes = UpdateRoom;

    fn id(&self) -> DbId {
        self.id
    }

    fn validate(&self) -> Result<(), CoreError> {
        validate_name("name", &self.name)
    }

    fn validate_new(input: &CreateRoom) -> Result<(), CoreError> {
        validate_name("name", &input.name)
    }

    fn with_changes(&self, changes: UpdateRoom) -> Self {
        Self {
            name: changes.name,
            ..self.clone()
        }
    }
}

impl Record for Room {
    const TABLE: &'static str = "rooms";
    const COLUMNS: &'static str = "id, name, created_at, updated_at";
    const INSERT_COLUMNS: &'static [&'static str] = &["name"];
    const UPDATE_COLUMNS: &'static [&'static str] = &["name"];

    fn bind_insert<'q>(input: &'q CreateRoom, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query.bind(&input.name)
    }

    fn bind_update<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q> {
        query.bind(&self.name)
    }
}
