//! Repository layer.
//!
//! [`Repository`] is the data-access contract the service layer depends on.
//! [`SqlRepository`] implements it once for every [`Record`](crate::record::Record)
//! against the shared MySQL pool.
//!
//! `update` and `delete` succeed silently when the id does not exist. Callers
//! that need a not-found signal probe with `find_by_id` first.

pub mod sql_repo;

use async_trait::async_trait;
use roomboard_core::entity::Entity;
use roomboard_core::types::DbId;

use crate::models::board::Board;
use crate::models::room::Room;
use crate::models::todo::Todo;

pub use sql_repo::SqlRepository;

pub type RoomRepo = SqlRepository<Room>;
pub type BoardRepo = SqlRepository<Board>;
pub type TodoRepo = SqlRepository<Todo>;

/// CRUD operations over one resource type.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// List every record, ordered by id.
    async fn list(&self) -> Result<Vec<E>, sqlx::Error>;

    /// List the records owned by `parent_id`, ordered by id.
    ///
    /// The default filters [`Repository::list`] in memory.
    async fn list_by_parent(&self, parent_id: DbId) -> Result<Vec<E>, sqlx::Error> {
        let all = self.list().await?;
        Ok(all
            .into_iter()
            .filter(|e| e.parent_id() == Some(parent_id))
            .collect())
    }

    /// Find a record by id. `None` when no row matches.
    async fn find_by_id(&self, id: DbId) -> Result<Option<E>, sqlx::Error>;

    /// Insert a record, returning the store-assigned id.
    async fn create(&self, input: &E::New) -> Result<DbId, sqlx::Error>;

    /// Write the editable fields of `entity`. A missing id is not an error.
    async fn update(&self, entity: &E) -> Result<(), sqlx::Error>;

    /// Delete a record by id. A missing id is not an error.
    async fn delete(&self, id: DbId) -> Result<(), sqlx::Error>;
}
