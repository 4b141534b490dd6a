use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use time_records::shared::infrastructure::directory::in_memory::InMemoryDirectory;
use time_records::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use time_records::shared::infrastructure::signature_store::in_memory::InMemorySignatureStore;
use time_records::shell::config::Settings;
use time_records::shell::http::router;
use time_records::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::load().context("loading settings")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    fmt().with_env_filter(filter).init();

    // In-memory deps for now
    let directory = match &settings.directory_seed {
        Some(path) => InMemoryDirectory::load_seed_file(path)
            .with_context(|| format!("loading directory seed {}", path.display()))?,
        None => InMemoryDirectory::new(),
    };
    let state = AppState::new(
        Arc::new(InMemoryEventStore::new()),
        Arc::new(directory),
        Arc::new(InMemorySignatureStore::new()),
        settings.report_policy()?,
        settings.replay_pause_edits,
    );

    let addr: SocketAddr = settings
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind_addr {}", settings.bind_addr))?;
    tracing::info!(%addr, timezone = %settings.default_timezone, "time records API listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;
    Ok(())
}
