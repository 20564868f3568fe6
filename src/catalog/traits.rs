use crate::models::Property;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all property catalog sources
/// The search and favorites code only ever sees this, so a database or API
/// backed source can replace the built-in data without touching them
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch the full, ordered property sequence
    async fn fetch(&self) -> Result<Vec<Property>>;

    /// Get the name of the catalog source
    fn source_name(&self) -> &'static str;
}
