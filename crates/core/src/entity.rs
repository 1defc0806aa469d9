//! The contract every persisted resource (room, board, todo) fulfils.
//!
//! The generic repository and service layers are written once against this
//! trait and instantiated per resource.

use crate::error::CoreError;
use crate::types::DbId;

/// A record with identity, a validation rule, and a pure update function.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable name used in errors and logs (e.g. `"Room"`).
    const NAME: &'static str;

    /// Client-supplied fields for creating a record. Never carries `id` or
    /// timestamps; those are assigned by the store.
    type New: Send + Sync + 'static;

    /// Client-supplied fields for updating an existing record.
    type Changes: Send + 'static;

    fn id(&self) -> DbId;

    /// Id of the owning record, for resources nested under a parent.
    fn parent_id(&self) -> Option<DbId> {
        None
    }

    /// Check the field rules on a persisted (or about to be persisted) value.
    fn validate(&self) -> Result<(), CoreError>;

    /// Check the field rules on a create request before anything is stored.
    fn validate_new(input: &Self::New) -> Result<(), CoreError>;

    /// Return a copy of `self` with `changes` applied.
    ///
    /// The result is not validated; callers must run [`Entity::validate`]
    /// before persisting it.
    fn with_changes(&self, changes: Self::Changes) -> Self;
}
