//! Notification Logging Endpoints
//!
//! `GET /health` reports database reachability; `POST /notify` validates a
//! payload and appends one row to the log table.

use axum::body::Bytes;
use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;

use crate::registry::handlers::error_response;

use super::log::NotificationLog;
use super::types::{DbHealthResponse, NotificationRequest, NotifyResponse};

/// Builds the logger service router over a shared log handle.
pub fn router(log: Arc<NotificationLog>) -> Router {
    Router::new()
        .route("/health", get(handle_db_health))
        .route("/notify", post(handle_notify))
        .layer(Extension(log))
}

pub async fn handle_db_health(Extension(log): Extension<Arc<NotificationLog>>) -> Response {
    match log.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(DbHealthResponse {
                status: "ok".to_string(),
                db_status: "connected".to_string(),
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Database health check failed: {}", err);
            error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                format!("database unreachable: {}", err),
            )
        }
    }
}

pub async fn handle_notify(
    Extension(log): Extension<Arc<NotificationLog>>,
    body: Bytes,
) -> Response {
    let request: NotificationRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(_) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "request body must contain `type` and `recipient`",
            )
        }
    };

    if request.kind.trim().is_empty() || request.recipient.trim().is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            "`type` and `recipient` must be non-empty",
        );
    }

    if log.record(&request.kind, &request.recipient).await {
        (
            StatusCode::CREATED,
            Json(NotifyResponse {
                status: "logged".to_string(),
            }),
        )
            .into_response()
    } else {
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to write notification log",
        )
    }
}
