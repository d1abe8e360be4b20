//! MySQL Notification Log
//!
//! Connection factory over the `logs` table. Every operation opens one
//! connection, runs a single statement, and closes the connection on every
//! exit path. There is no pool and no retry.

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;

use super::types::LogEntry;

const CREATE_LOGS_TABLE: &str = "\
    CREATE TABLE IF NOT EXISTS logs (\
        id INT AUTO_INCREMENT PRIMARY KEY,\
        balancer_id VARCHAR(50),\
        api_instance VARCHAR(50),\
        queue_used VARCHAR(50),\
        worker_id VARCHAR(50),\
        notification_type VARCHAR(10) NOT NULL,\
        recipient VARCHAR(100) NOT NULL,\
        status VARCHAR(50),\
        processed_at VARCHAR(50)\
    )";

const INSERT_LOG: &str = "\
    INSERT INTO logs (\
        balancer_id, api_instance, queue_used, worker_id,\
        notification_type, recipient, status, processed_at\
    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)";

pub struct NotificationLog {
    options: MySqlConnectOptions,
}

impl NotificationLog {
    pub fn new(options: MySqlConnectOptions) -> Self {
        Self { options }
    }

    async fn connect(&self) -> Result<MySqlConnection, sqlx::Error> {
        MySqlConnection::connect_with(&self.options).await
    }

    /// Creates the `logs` table if it does not exist. Run once at startup;
    /// a failure here means the database is misconfigured or unreachable.
    pub async fn setup(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(CREATE_LOGS_TABLE).execute(&mut conn).await;
        conn.close().await?;
        result.map(|_| ())
    }

    /// Logs one notification. Database failures are swallowed to `false`;
    /// the caller decides whether and how to react.
    pub async fn record(&self, kind: &str, recipient: &str) -> bool {
        let entry = LogEntry::direct(kind, recipient);

        match self.insert_entry(&entry).await {
            Ok(()) => {
                tracing::info!(
                    "Logged {} notification for {}",
                    entry.notification_type,
                    entry.recipient
                );
                true
            }
            Err(err) => {
                tracing::error!("Failed to write notification log: {}", err);
                false
            }
        }
    }

    async fn insert_entry(&self, entry: &LogEntry) -> Result<(), sqlx::Error> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(INSERT_LOG)
            .bind(&entry.balancer_id)
            .bind(&entry.api_instance)
            .bind(&entry.queue_used)
            .bind(&entry.worker_id)
            .bind(&entry.notification_type)
            .bind(&entry.recipient)
            .bind(&entry.status)
            .bind(&entry.processed_at)
            .execute(&mut conn)
            .await;
        conn.close().await?;
        result.map(|_| ())
    }

    /// Opens and immediately closes a connection. Used by the health check.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        let conn = self.connect().await?;
        conn.close().await
    }
}
