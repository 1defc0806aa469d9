//! Table mapping used by the generic [`SqlRepository`](crate::repositories::SqlRepository).
//!
//! Each model declares its table, column lists and bind order once; the SQL
//! text itself is assembled by the repository.

use roomboard_core::entity::Entity;
use sqlx::mysql::{MySqlArguments, MySqlRow};
use sqlx::query::Query;
use sqlx::{FromRow, MySql};

/// A parameterized MySQL statement awaiting its bind values.
pub type MySqlQuery<'q> = Query<'q, MySql, MySqlArguments>;

/// An [`Entity`] stored as one row of a MySQL table.
pub trait Record: Entity + for<'r> FromRow<'r, MySqlRow> + Unpin {
    /// Table name.
    const TABLE: &'static str;

    /// Column list for SELECT statements, in `FromRow` order.
    const COLUMNS: &'static str;

    /// Columns written on INSERT, in the order [`Record::bind_insert`] binds them.
    const INSERT_COLUMNS: &'static [&'static str];

    /// Columns written on UPDATE, in the order [`Record::bind_update`] binds them.
    const UPDATE_COLUMNS: &'static [&'static str];

    /// Foreign key to the owning table, if the resource is nested.
    const PARENT_COLUMN: Option<&'static str> = None;

    fn bind_insert<'q>(input: &'q Self::New, query: MySqlQuery<'q>) -> MySqlQuery<'q>;

    fn bind_update<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q>;
}
