//! Student Input Validation
//!
//! Turns an untyped JSON value into a [`Student`] or a classified failure.
//!
//! The order of checks is part of the contract and must not be reordered:
//! presence -> id type -> id conflict -> name validity -> age type -> email
//! normalization. Validation never inserts; the store write happens only
//! after the whole input has been accepted.

use axum::http::StatusCode;
use serde_json::Value;
use thiserror::Error;

use super::store::StudentStore;
use super::types::Student;

/// Keys that must be present in every creation request.
const REQUIRED_FIELDS: [&str; 2] = ["id", "name"];

/// Classified validation failure. Every variant maps to a 4xx status.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("request body must be a non-empty JSON object")]
    EmptyBody,
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
    #[error("field `{field}` must be a valid integer")]
    InvalidType { field: &'static str },
    #[error("field `{field}` must be a non-empty string")]
    InvalidField { field: &'static str },
    #[error("a student with id {0} already exists")]
    Conflict(i64),
}

impl ValidationError {
    pub fn status(&self) -> StatusCode {
        match self {
            ValidationError::Conflict(_) => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// Validates a creation payload against the current store contents.
///
/// Pure with respect to the store: it only reads `contains` for the conflict
/// check. Callers insert the returned record separately.
pub fn validate_student(body: &Value, store: &StudentStore) -> Result<Student, ValidationError> {
    let map = match body.as_object() {
        Some(map) if !map.is_empty() => map,
        _ => return Err(ValidationError::EmptyBody),
    };

    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|key| !map.contains_key(**key))
        .map(|key| key.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let id = coerce_int(&map["id"]).ok_or(ValidationError::InvalidType { field: "id" })?;

    if store.contains(id) {
        return Err(ValidationError::Conflict(id));
    }

    let name = coerce_string(&map["name"])
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or(ValidationError::InvalidField { field: "name" })?;

    let age = match map.get("age") {
        None | Some(Value::Null) => None,
        Some(value) => {
            Some(coerce_int(value).ok_or(ValidationError::InvalidType { field: "age" })?)
        }
    };

    // An email that is absent, null, empty after trimming, or not a scalar
    // normalizes to no value. This path has no error variant.
    let email = match map.get("email") {
        None | Some(Value::Null) => None,
        Some(value) => coerce_string(value)
            .map(|email| email.trim().to_string())
            .filter(|email| !email.is_empty()),
    };

    Ok(Student {
        id,
        name,
        age,
        email,
    })
}

/// Lenient integer coercion: integers, floats with zero fraction, and
/// strings that parse as `i64` after trimming.
fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .filter(|f| *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Lenient string coercion: strings as-is, numbers and bools rendered to
/// their literal text. Arrays, objects and null do not coerce.
fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
