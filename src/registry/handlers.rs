//! Student Registry Endpoints
//!
//! Routes each HTTP verb/path to one validator or store call and maps
//! failure classes to status codes: client input errors -> 400, duplicate
//! id -> 409, wrong content type -> 415, unknown id -> 404.

use axum::body::Bytes;
use axum::extract::{Extension, Path};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use std::sync::Arc;

use super::store::StudentStore;
use super::types::{ErrorResponse, HealthResponse, Student};
use super::validate::validate_student;

/// Builds the registry service router over a shared store.
pub fn router(store: Arc<StudentStore>) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/students", get(handle_list_students))
        .route("/student", post(handle_create_student))
        .route("/students/:id", get(handle_get_student))
        .layer(Extension(store))
}

pub async fn handle_health() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
        }),
    )
}

pub async fn handle_list_students(
    Extension(store): Extension<Arc<StudentStore>>,
) -> (StatusCode, Json<Vec<Student>>) {
    (StatusCode::OK, Json(store.list_all()))
}

pub async fn handle_create_student(
    Extension(store): Extension<Arc<StudentStore>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if !is_json_content_type(&headers) {
        return error_response(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Content-Type must be application/json",
        );
    }

    // An unparseable body falls through to the empty-body check, like a
    // silently-failed JSON parse yielding an empty mapping.
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    let student = match validate_student(&payload, &store) {
        Ok(student) => student,
        Err(err) => {
            tracing::warn!("Rejected student creation: {}", err);
            return error_response(err.status(), err.to_string());
        }
    };

    match store.insert(student.clone()) {
        Ok(()) => {
            tracing::info!("Created student {} ({})", student.id, student.name);
            (StatusCode::CREATED, Json(student)).into_response()
        }
        Err(err) => {
            tracing::warn!("Insert raced with a duplicate: {}", err);
            error_response(err.status(), err.to_string())
        }
    }
}

pub async fn handle_get_student(
    Extension(store): Extension<Arc<StudentStore>>,
    Path(raw_id): Path<String>,
) -> Response {
    // A non-numeric id segment matches no record and reads as 404, the same
    // way a typed route pattern would refuse to match it.
    let id: i64 = match raw_id.parse() {
        Ok(id) => id,
        Err(_) => {
            return error_response(StatusCode::NOT_FOUND, "no student with the given id")
        }
    };

    match store.get(id) {
        Some(student) => (StatusCode::OK, Json(student)).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "no student with the given id"),
    }
}

pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

pub(crate) fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            value
                .split(';')
                .next()
                .unwrap_or("")
                .trim()
                .eq_ignore_ascii_case("application/json")
        })
        .unwrap_or(false)
}
