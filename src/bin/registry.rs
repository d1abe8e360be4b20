use notifyhub::config;
use notifyhub::registry::handlers::router;
use notifyhub::registry::store::StudentStore;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let port = config::port_from_args(&args)?;

    // The store lives for the process lifetime; no persistence.
    let store = Arc::new(StudentStore::new());
    let app = router(store);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Student registry listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
