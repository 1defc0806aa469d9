//! Generic create/read/update/delete service.

use std::sync::Arc;

use roomboard_core::entity::Entity;
use roomboard_core::error::CoreError;
use roomboard_core::types::DbId;
use roomboard_db::repositories::Repository;

use crate::error::AppResult;

/// Enforces validation and existence rules for one resource type.
///
/// Repositories treat `update`/`delete` of a missing id as success; this
/// service probes with `find_by_id` first so callers get
/// [`CoreError::NotFound`] instead. Input that fails validation never
/// reaches the repository.
pub struct CrudService<E: Entity> {
    repo: Arc<dyn Repository<E>>,
}

impl<E: Entity> Clone for CrudService<E> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<E: Entity> CrudService<E> {
    pub fn new(repo: Arc<dyn Repository<E>>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> AppResult<Vec<E>> {
        Ok(self.repo.list().await?)
    }

    /// Records owned by `parent_id` (boards of a room, todos of a board).
    pub async fn list_by_parent(&self, parent_id: DbId) -> AppResult<Vec<E>> {
        Ok(self.repo.list_by_parent(parent_id).await?)
    }

    pub async fn get_by_id(&self, id: DbId) -> AppResult<E> {
        let entity = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: E::NAME,
                id,
            })?;
        Ok(entity)
    }

    /// Validate and insert a new record, returning its id.
    pub async fn create(&self, input: E::New) -> AppResult<DbId> {
        E::validate_new(&input)?;

        let id = self.repo.create(&input).await?;
        tracing::info!(entity = E::NAME, id, "Created");
        Ok(id)
    }

    /// Apply `changes` to an existing record, validate, and persist.
    pub async fn update(&self, id: DbId, changes: E::Changes) -> AppResult<()> {
        let current = self.get_by_id(id).await?;

        let updated = current.with_changes(changes);
        updated.validate()?;

        self.repo.update(&updated).await?;
        tracing::info!(entity = E::NAME, id, "Updated");
        Ok(())
    }

    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        self.get_by_id(id).await?;

        self.repo.delete(id).await?;
        tracing::info!(entity = E::NAME, id, "Deleted");
        Ok(())
    }
}
