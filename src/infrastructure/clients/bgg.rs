use crate::config::CatalogConfig;
use crate::error::{Result, SyncError};
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

/// Thin GET wrapper around the BoardGameGeek XML API 2. Returns raw bodies;
/// decoding lives in `infrastructure::xml`.
#[derive(Clone)]
pub struct BggClient {
    client: Client,
    base_url: String,
}

impl BggClient {
    pub fn new(client: Client, config: &CatalogConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch_collection(&self, username: &str) -> Result<String> {
        let url = format!("{}/collection", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("username", username)])
            .send()
            .await?;

        if response.status() == StatusCode::ACCEPTED {
            warn!(
                "Collection for {} is queued by the catalog, listing will be empty",
                username
            );
        }

        self.read_body(response, url).await
    }

    pub async fn fetch_item(&self, id: &str) -> Result<String> {
        let url = format!("{}/thing", self.base_url);
        let response = self.client.get(&url).query(&[("id", id)]).send().await?;

        self.read_body(response, url).await
    }

    async fn read_body(&self, response: reqwest::Response, url: String) -> Result<String> {
        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Status { status, url });
        }

        let body = response.text().await?;
        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
