use anyhow::Context;
use notifyhub::config::{self, DbConfig};
use notifyhub::notify::handlers::router;
use notifyhub::notify::log::NotificationLog;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let port = config::port_from_args(&args)?;

    let db = DbConfig::from_env();
    tracing::info!("Using database {} on {}", db.database, db.host);

    let log = NotificationLog::new(db.connect_options());
    log.setup()
        .await
        .context("MySQL connection/setup failed")?;
    tracing::info!("Log table ready");

    let app = router(Arc::new(log));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Notification logger listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
