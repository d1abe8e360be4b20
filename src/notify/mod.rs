//! Notification Logging Module
//!
//! Implements the notification-logging service.
//!
//! ## Core Concepts
//! - **Append-only log**: Every accepted notification becomes one row in the
//!   MySQL `logs` table; rows are never read back by this service.
//! - **Per-operation connections**: A connection is opened and closed inside
//!   each logical operation. No pool, no retries.
//! - **Swallowed write failures**: A failed insert reports `false` to the
//!   caller; the caller decides what to do next.

pub mod handlers;
pub mod log;
pub mod types;

#[cfg(test)]
mod tests;
