use crate::catalog::traits::CatalogProvider;
use crate::models::Property;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Catalog served as a JSON array over HTTP
pub struct RemoteCatalog {
    client: Client,
    url: String,
}

impl RemoteCatalog {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("estate-scout/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CatalogProvider for RemoteCatalog {
    async fn fetch(&self) -> Result<Vec<Property>> {
        info!("Fetching catalog from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to fetch catalog")?;

        if !response.status().is_success() {
            warn!("Catalog endpoint returned status: {}", response.status());
            anyhow::bail!("Failed to fetch catalog: {}", response.status());
        }

        let properties: Vec<Property> = response
            .json()
            .await
            .context("Failed to decode catalog response")?;

        debug!("Fetched {} properties", properties.len());
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "remote"
    }
}
