//! Domain building blocks shared by the repository and HTTP layers.
//!
//! Everything here is pure logic: no database or HTTP dependencies.

pub mod entity;
pub mod error;
pub mod types;
pub mod validation;
