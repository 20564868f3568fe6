//! Favorite membership shared by every screen.
//!
//! The listing toggle, the detail toggle and the favorites screen all go
//! through one [`FavoriteSet`], so they can never disagree.

use crate::catalog::Catalog;
use crate::models::Property;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Property ids marked as favorite, in the order they were added
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: Vec<String>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|f| f == id)
    }

    /// Returns `true` if the id was not already a favorite
    pub fn add(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        debug!("Adding favorite {}", id);
        self.ids.push(id.to_string());
        true
    }

    /// Returns `true` if the id was a favorite
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|f| f != id);
        let removed = self.ids.len() != before;
        if removed {
            debug!("Removed favorite {}", id);
        }
        removed
    }

    /// Flip membership, returning whether the id is now a favorite
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.remove(id) {
            false
        } else {
            self.add(id)
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Favorited properties as the favorites screen shows them
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Property> {
        self.ids
            .iter()
            .filter_map(|id| {
                let found = catalog.get(id);
                if found.is_none() {
                    warn!("Favorite {} is not in the catalog", id);
                }
                found
            })
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            let id: String = id.into();
            set.add(&id);
        }
        set
    }
}
