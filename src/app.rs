use crate::catalog::{provider_for, Catalog};
use crate::config::Config;
use crate::inquiry::InquiryForm;
use crate::profile::ProfileStats;
use crate::render;
use crate::search::SearchFilter;
use crate::state::UserState;
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;
use tracing::info;

/// One run of the browser: catalog, persisted user state and profile
pub struct App {
    config: Config,
    catalog: Catalog,
    state: UserState,
    state_path: PathBuf,
    dirty: bool,
}

impl App {
    /// Load the catalog and the user state named by the config
    pub async fn open(config: Config) -> Result<Self> {
        let provider = provider_for(&config.catalog.source)?;
        let catalog = Catalog::load(provider.as_ref())
            .await
            .with_context(|| format!("Failed to load catalog from {}", config.catalog.source))?;

        let state_path = config.state.path.clone();
        let state = UserState::load(&state_path).await?;

        Ok(Self::new(config, catalog, state, state_path))
    }

    pub fn new(config: Config, catalog: Catalog, state: UserState, state_path: PathBuf) -> Self {
        Self {
            config,
            catalog,
            state,
            state_path,
            dirty: false,
        }
    }

    pub fn list(&self, filter: &SearchFilter) -> String {
        let results = self.catalog.search(filter);
        info!("{} of {} properties match", results.len(), self.catalog.len());
        render::listing(&results, filter, &self.state.favorites)
    }

    pub fn list_json(&self, filter: &SearchFilter) -> Result<String> {
        let results = self.catalog.search(filter);
        Ok(serde_json::to_string_pretty(&results)?)
    }

    pub fn show(&mut self, id: &str) -> Result<String> {
        let property = self
            .catalog
            .get(id)
            .with_context(|| format!("Property not found: {id}"))?;
        let out = render::detail(property, &self.state.favorites);

        self.state.record_view(id);
        self.dirty = true;
        Ok(out)
    }

    /// Heart toggle on the listing and detail screens
    pub fn toggle_favorite(&mut self, id: &str) -> Result<String> {
        let property = self
            .catalog
            .get(id)
            .with_context(|| format!("Property not found: {id}"))?;

        let now_favorite = self.state.favorites.toggle(id);
        self.dirty = true;

        Ok(if now_favorite {
            format!("♥ Added {} to favorites", property.title)
        } else {
            format!("♡ Removed {} from favorites", property.title)
        })
    }

    /// Removal from the favorites screen
    pub fn remove_favorite(&mut self, id: &str) -> String {
        if self.state.favorites.remove(id) {
            self.dirty = true;
            let title = self.catalog.get(id).map_or(id, |p| p.title.as_str());
            format!("♡ Removed {title} from favorites")
        } else {
            format!("{id} is not a favorite")
        }
    }

    pub fn favorites(&self) -> String {
        let properties = self.state.favorites.resolve(&self.catalog);
        render::favorites(&properties, &self.state.favorites)
    }

    pub fn contact(&mut self, id: &str, form: InquiryForm) -> Result<String> {
        let property = self
            .catalog
            .get(id)
            .with_context(|| format!("Property not found: {id}"))?;

        let inquiry = form.submit(property, Utc::now())?;
        let confirmation = inquiry.confirmation();
        self.state.inquiries.push(inquiry);
        self.dirty = true;

        Ok(format!("Inquiry Sent! {confirmation}"))
    }

    pub fn profile(&self) -> String {
        render::profile(&self.config.profile, &ProfileStats::from_state(&self.state))
    }

    /// Write the user state back if this run changed it
    pub async fn persist(&mut self) -> Result<()> {
        if self.dirty {
            self.state.save(&self.state_path).await?;
            self.dirty = false;
        }
        Ok(())
    }
}
