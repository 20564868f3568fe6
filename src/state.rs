use crate::favorites::FavoriteSet;
use crate::inquiry::Inquiry;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Per-user state kept between runs
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserState {
    pub favorites: FavoriteSet,
    pub viewed: Vec<String>,
    pub inquiries: Vec<Inquiry>,
}

impl UserState {
    /// Load state from `path`. A missing file is an empty state.
    pub async fn load(path: &Path) -> Result<Self> {
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No state file at {}, starting empty", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read state file {}", path.display()))
            }
        };

        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse state file {}", path.display()))
    }

    pub async fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write state file {}", path.display()))?;

        info!("💾 Saved state to {}", path.display());
        Ok(())
    }

    /// Remember that a property's detail page was opened
    pub fn record_view(&mut self, id: &str) {
        if !self.viewed.iter().any(|v| v == id) {
            self.viewed.push(id.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BuiltinCatalog;
    use crate::inquiry::InquiryForm;
    use chrono::Utc;

    #[tokio::test]
    async fn missing_file_loads_empty_state() {
        let dir = tempfile::tempdir().unwrap();
        let state = UserState::load(&dir.path().join("state.json")).await.unwrap();
        assert_eq!(state, UserState::default());
    }

    #[tokio::test]
    async fn save_then_load_keeps_favorites_and_inquiries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let mut state = UserState::default();
        state.favorites.add("3");
        state.favorites.add("1");
        state.record_view("3");

        let form = InquiryForm {
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            message: "Hello".to_string(),
            ..InquiryForm::default()
        };
        let inquiry = form.submit(&BuiltinCatalog::properties()[2], Utc::now()).unwrap();
        state.inquiries.push(inquiry);

        state.save(&path).await.unwrap();
        let loaded = UserState::load(&path).await.unwrap();
        assert_eq!(loaded, state);
        assert_eq!(loaded.favorites.ids(), ["3", "1"]);
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "[1, 2").unwrap();

        let err = UserState::load(&path).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse state file"));
    }

    #[test]
    fn record_view_counts_each_property_once() {
        let mut state = UserState::default();
        state.record_view("1");
        state.record_view("1");
        state.record_view("2");
        assert_eq!(state.viewed, ["1", "2"]);
    }
}
