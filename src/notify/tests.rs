//! Notification Module Tests
//!
//! Validates log-entry construction and the payload checks of the notify
//! endpoint.
//!
//! *Note: operations that touch MySQL (`setup`, `record`, `ping`) are
//! covered in integration tests against a running database.*

#[cfg(test)]
mod tests {
    use crate::config::DbConfig;
    use crate::notify::handlers::router;
    use crate::notify::log::NotificationLog;
    use crate::notify::types::{
        LogEntry, NotificationRequest, BALANCER_ID, QUEUE_USED, STATUS_LOGGED, WORKER_ID,
    };
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    // ============================================================
    // LOG ENTRY TESTS
    // ============================================================

    #[test]
    fn test_direct_entry_uppercases_type() {
        let entry = LogEntry::direct("email", "ana@example.com");
        assert_eq!(entry.notification_type, "EMAIL");
        assert_eq!(entry.recipient, "ana@example.com");
    }

    #[test]
    fn test_direct_entry_uses_placeholder_identity() {
        let entry = LogEntry::direct("sms", "+34123456789");

        assert_eq!(entry.balancer_id, BALANCER_ID);
        assert_eq!(entry.queue_used, QUEUE_USED);
        assert_eq!(entry.worker_id, WORKER_ID);
        assert_eq!(entry.status, STATUS_LOGGED);
        assert!(!entry.api_instance.is_empty());
    }

    #[test]
    fn test_direct_entry_timestamp_is_rfc3339() {
        let entry = LogEntry::direct("push", "device-42");
        assert!(
            chrono::DateTime::parse_from_rfc3339(&entry.processed_at).is_ok(),
            "processed_at was: {}",
            entry.processed_at
        );
    }

    #[test]
    fn test_request_uses_type_on_the_wire() {
        let request: NotificationRequest =
            serde_json::from_str(r#"{"type": "email", "recipient": "bob@example.com"}"#).unwrap();
        assert_eq!(request.kind, "email");
        assert_eq!(request.recipient, "bob@example.com");
    }

    // ============================================================
    // ENDPOINT VALIDATION TESTS (no database needed)
    // ============================================================

    fn offline_router() -> axum::Router {
        // Points at the default config; the 400 paths below reject before
        // any connection attempt is made.
        let log = NotificationLog::new(DbConfig::from_env().connect_options());
        router(Arc::new(log))
    }

    fn post_notify(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/notify")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_notify_rejects_missing_fields() {
        let response = offline_router()
            .oneshot(post_notify(r#"{"type": "email"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_notify_rejects_unparseable_body() {
        let response = offline_router()
            .oneshot(post_notify("not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_notify_rejects_blank_fields() {
        let response = offline_router()
            .oneshot(post_notify(r#"{"type": "  ", "recipient": "ana@example.com"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = offline_router()
            .oneshot(post_notify(r#"{"type": "email", "recipient": ""}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
