pub mod builtin;
pub mod file;
pub mod remote;
pub mod traits;

pub use builtin::BuiltinCatalog;
pub use file::JsonFileCatalog;
pub use remote::RemoteCatalog;
pub use traits::CatalogProvider;

use crate::models::Property;
use crate::search::{project, SearchFilter};
use anyhow::Result;
use std::collections::HashSet;
use tracing::{info, warn};

/// Read-only property catalog, loaded once at startup
#[derive(Debug, Clone)]
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    /// Load the catalog from a provider
    pub async fn load(provider: &dyn CatalogProvider) -> Result<Self> {
        let properties = provider.fetch().await?;
        info!(
            "Loaded {} properties from {} catalog",
            properties.len(),
            provider.source_name()
        );
        Ok(Self::from_properties(properties))
    }

    pub fn from_properties(properties: Vec<Property>) -> Self {
        let mut seen = HashSet::new();
        for property in &properties {
            if !seen.insert(property.id.as_str()) {
                warn!("Duplicate property id {} in catalog", property.id);
            }
        }
        Self { properties }
    }

    pub fn all(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Look up a property by id. The first record wins on duplicate ids.
    pub fn get(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Visible subsequence for the given filter state
    pub fn search(&self, filter: &SearchFilter) -> Vec<&Property> {
        project(&self.properties, filter)
    }
}

/// Pick a provider for a configured source: `builtin`, an http(s) URL, or a file path
pub fn provider_for(source: &str) -> Result<Box<dyn CatalogProvider>> {
    let source = source.trim();
    if source.is_empty() || source.eq_ignore_ascii_case("builtin") {
        Ok(Box::new(BuiltinCatalog::new()))
    } else if source.starts_with("http://") || source.starts_with("https://") {
        Ok(Box::new(RemoteCatalog::new(source)?))
    } else {
        Ok(Box::new(JsonFileCatalog::new(source)))
    }
}
