//! Notification Logging DTOs
//!
//! The request payload, the row written to the `logs` table, and the
//! response bodies.

use serde::{Deserialize, Serialize};

// --- Placeholder identity fields ---
//
// The service writes directly, without a balancer, queue or worker in front
// of it, so those columns carry fixed markers.

pub const BALANCER_ID: &str = "nginx-proxy";
pub const QUEUE_USED: &str = "none";
pub const WORKER_ID: &str = "api-direct";
pub const STATUS_LOGGED: &str = "logged-direct";

/// Body of `POST /notify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRequest {
    /// Notification channel, e.g. "email" or "sms". Stored uppercased.
    #[serde(rename = "type")]
    pub kind: String,
    pub recipient: String,
}

/// One row of the append-only `logs` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    pub balancer_id: String,
    pub api_instance: String,
    pub queue_used: String,
    pub worker_id: String,
    pub notification_type: String,
    pub recipient: String,
    pub status: String,
    pub processed_at: String,
}

impl LogEntry {
    /// Builds the row for a directly-received notification: placeholder
    /// identity fields, the current host name as instance id, the current
    /// timestamp, and the notification type uppercased.
    pub fn direct(kind: &str, recipient: &str) -> Self {
        let api_instance = hostname::get()
            .map(|host| host.to_string_lossy().into_owned())
            .unwrap_or_else(|_| "unknown-host".to_string());

        Self {
            balancer_id: BALANCER_ID.to_string(),
            api_instance,
            queue_used: QUEUE_USED.to_string(),
            worker_id: WORKER_ID.to_string(),
            notification_type: kind.to_uppercase(),
            recipient: recipient.to_string(),
            status: STATUS_LOGGED.to_string(),
            processed_at: chrono::Local::now().to_rfc3339(),
        }
    }
}

/// Body of `GET /health`: service status plus database reachability.
#[derive(Debug, Serialize, Deserialize)]
pub struct DbHealthResponse {
    pub status: String,
    pub db_status: String,
}

/// Body of a successful `POST /notify`.
#[derive(Debug, Serialize, Deserialize)]
pub struct NotifyResponse {
    pub status: String,
}
