//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO carrying only client-settable fields
//! - An update DTO carrying the replaceable fields
//! - The [`Entity`](roomboard_core::entity::Entity) and
//!   [`Record`](crate::record::Record) implementations

pub mod board;
pub mod room;
pub mod todo;
