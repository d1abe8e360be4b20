//! Student Registry DTOs
//!
//! The record type held by the store plus the response bodies the
//! endpoints serialize.

use serde::{Deserialize, Serialize};

/// A registered student. `id` is caller-supplied and unique across the store.
///
/// `age` and `email` are optional; an empty-after-trim email is normalized to
/// `None` during validation and never stored as an empty string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: Option<i64>,
    pub email: Option<String>,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Uniform error body: `{"error": "..."}` with the status carried by HTTP.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
