//! NotifyHub Services Library
//!
//! This library crate defines the modules shared by the two service binaries
//! (`registry` and `logger`).
//!
//! ## Architecture Modules
//! - **`registry`**: The student-record service. Keeps an in-memory registry of
//!   uniquely-keyed student records behind a small CRUD-style HTTP API, with
//!   structured validation of untyped JSON input.
//! - **`notify`**: The notification-logging service. Validates notification
//!   payloads and appends one row per notification to a MySQL log table,
//!   opening and closing a connection per operation.
//! - **`config`**: Environment-sourced database configuration and the shared
//!   command-line port flag.

pub mod config;
pub mod notify;
pub mod registry;
