//! Student Registry Module
//!
//! Implements the in-memory student-record service.
//!
//! ## Core Concepts
//! - **Validation**: `validate` turns an untyped JSON mapping into a `Student`
//!   or a classified error, with a fixed order of checks.
//! - **Storage**: `StudentStore` maps student id to record; ids are unique and
//!   a record is never mutated once inserted.
//! - **Endpoints**: `handlers` wires the validator and the store to the HTTP
//!   routes and maps each failure class to a status code.

pub mod handlers;
pub mod store;
pub mod types;
pub mod validate;
