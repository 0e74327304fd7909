use anyhow::Context;
use mock_server::Store;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("MOCK_SERVER_LOG_LEVEL")
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store = match std::env::var("SEED_FILE") {
        Ok(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read seed file {path}"))?;
            let store = Store::from_seed(&raw)
                .with_context(|| format!("failed to parse seed file {path}"))?;
            tracing::info!(count = store.len(), "loaded seed comments");
            store
        }
        Err(_) => Store::default(),
    };

    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{addr}/api");
    mock_server::run_with(listener, store).await?;
    Ok(())
}
