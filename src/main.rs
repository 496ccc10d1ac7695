use boardgame_sync::api::{self, AppState};
use boardgame_sync::config::{Commands, Config};
use boardgame_sync::error::Result;
use boardgame_sync::infrastructure::FileSystemStore;
use boardgame_sync::services::{CollectionUpdate, SyncWorkflow};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.args.log_level))
        .init();

    config.ensure_directories()?;
    let store = Arc::new(FileSystemStore::new(config.data_dir()));
    let sync = SyncWorkflow::from_config(config.http_client.clone(), &config.catalog, store);

    match &config.args.command {
        Some(Commands::Sync { username }) => match sync.update_collection(username).await? {
            CollectionUpdate::NotFound => info!("No games found in collection of {}", username),
            CollectionUpdate::Updated { new_entries, total } => info!(
                "Collection updated successfully. New entries added: {}. Total games in the database: {}",
                new_entries, total
            ),
        },
        Some(Commands::Refresh) => {
            let summary = sync.refresh_all().await?;
            info!("Games updated successfully: {} refreshed", summary.refreshed);
        }
        Some(Commands::Serve) | None => {
            let app = api::router(AppState {
                sync: Arc::new(sync),
            });
            let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
            info!("Server running at {}", listener.local_addr()?);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
