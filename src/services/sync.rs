use crate::config::CatalogConfig;
use crate::domain::{GameRecord, GameStore};
use crate::error::Result;
use crate::infrastructure::xml::{collection::parse_collection, thing::parse_thing};
use crate::infrastructure::BggClient;
use crate::services::throttle::Throttle;
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionUpdate {
    /// The listing had no owned games; the store was not touched.
    NotFound,
    Updated { new_entries: usize, total: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSummary {
    pub refreshed: usize,
}

pub struct SyncWorkflow {
    client: BggClient,
    store: Arc<dyn GameStore>,
    throttle: Throttle,
}

impl SyncWorkflow {
    pub fn new(client: BggClient, store: Arc<dyn GameStore + 'static>, throttle: Throttle) -> Self {
        Self {
            client,
            store,
            throttle,
        }
    }

    pub fn from_config(
        http_client: Client,
        catalog: &CatalogConfig,
        store: Arc<dyn GameStore + 'static>,
    ) -> Self {
        Self::new(
            BggClient::new(http_client, catalog),
            store,
            Throttle::new(catalog.api_call_delay),
        )
    }

    pub fn store(&self) -> &Arc<dyn GameStore> {
        &self.store
    }

    /// Pulls `username`'s collection and inserts every owned game the store
    /// doesn't know yet. Known games are neither fetched nor throttled. A game
    /// whose details can't be fetched is logged and left out.
    pub async fn update_collection(&self, username: &str) -> Result<CollectionUpdate> {
        info!("Updating collection for {}", username);

        let xml = self.client.fetch_collection(username).await?;
        let owned: Vec<String> = parse_collection(&xml)?
            .into_iter()
            .filter(|entry| entry.owned)
            .map(|entry| entry.id)
            .collect();

        if owned.is_empty() {
            info!("No owned games in collection of {}", username);
            return Ok(CollectionUpdate::NotFound);
        }

        let mut new_entries = 0;
        for id in owned {
            if self.store.contains(&id)? {
                debug!("Game {} skipped: already in the store", id);
                continue;
            }

            if let Some(game) = self.fetch_game_details(&id).await {
                self.store.save_game(&game)?;
                info!("Added {} ({})", game.name, game.id);
                new_entries += 1;
            }
            self.throttle.wait().await;
        }

        let total = self.store.count()?;
        info!(
            "Collection of {} updated: {} new, {} total",
            username, new_entries, total
        );
        Ok(CollectionUpdate::Updated { new_entries, total })
    }

    /// Re-fetches every stored game and overwrites it. Stops at the first
    /// failure.
    // TODO: apply the throttle here too once the catalog's rate limit for
    // bulk refreshes is confirmed.
    pub async fn refresh_all(&self) -> Result<RefreshSummary> {
        let ids = self.store.list_ids()?;
        info!("Refreshing {} stored games", ids.len());

        for id in &ids {
            let game = self.fetch_game(id).await?;
            self.store.save_game(&game)?;
            debug!("Refreshed {} ({})", game.name, game.id);
        }

        info!("Refreshed {} games", ids.len());
        Ok(RefreshSummary {
            refreshed: ids.len(),
        })
    }

    async fn fetch_game(&self, id: &str) -> Result<GameRecord> {
        let xml = self.client.fetch_item(id).await?;
        parse_thing(&xml)
    }

    async fn fetch_game_details(&self, id: &str) -> Option<GameRecord> {
        match self.fetch_game(id).await {
            Ok(game) => Some(game),
            Err(e) => {
                error!("Error fetching game details for ID {}: {}", id, e);
                None
            }
        }
    }
}
