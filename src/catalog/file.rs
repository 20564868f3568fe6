use crate::catalog::traits::CatalogProvider;
use crate::models::Property;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, info};

/// Catalog read from a JSON array on disk
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogProvider for JsonFileCatalog {
    async fn fetch(&self) -> Result<Vec<Property>> {
        info!("Reading catalog from {}", self.path.display());

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read catalog file {}", self.path.display()))?;

        debug!("Read {} bytes of catalog JSON", raw.len());

        let properties: Vec<Property> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse catalog file {}", self.path.display()))?;

        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BuiltinCatalog;

    #[tokio::test]
    async fn reads_catalog_written_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let json = serde_json::to_string_pretty(&BuiltinCatalog::properties()).unwrap();
        std::fs::write(&path, json).unwrap();

        let properties = JsonFileCatalog::new(&path).fetch().await.unwrap();
        assert_eq!(properties, BuiltinCatalog::properties());
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let provider = JsonFileCatalog::new(dir.path().join("nope.json"));

        let err = provider.fetch().await.unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog file"));
    }

    #[tokio::test]
    async fn malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileCatalog::new(&path).fetch().await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse catalog file"));
    }
}
