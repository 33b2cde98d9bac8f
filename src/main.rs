//! Lexmatch server binary

use std::sync::Arc;

use lexmatch::config::ServerConfig;
use lexmatch::seed::seed_if_empty;
use lexmatch::server::{AppState, serve};
use lexmatch::storage::InMemoryLawyerStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lexmatch=info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::load()?;
    let store = Arc::new(InMemoryLawyerStore::new());

    if config.seed {
        seed_if_empty(store.as_ref()).await?;
    }

    serve(&config, AppState::new(store)).await
}
