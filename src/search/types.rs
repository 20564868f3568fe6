use crate::models::PropertyType;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Category tab selected on the listing screen
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    #[default]
    All,
    House,
    Apartment,
    Commercial,
}

impl Category {
    /// Tabs in display order
    pub const OPTIONS: [Category; 4] = [
        Category::All,
        Category::House,
        Category::Apartment,
        Category::Commercial,
    ];

    /// Parse a raw category selection. Anything unrecognised selects `All`.
    pub fn from_input(input: &str) -> Self {
        let input = input.trim();
        Self::OPTIONS
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(input))
            .unwrap_or_else(|| {
                debug!("Unknown category {:?}, showing all", input);
                Category::All
            })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::House => "House",
            Category::Apartment => "Apartment",
            Category::Commercial => "Commercial",
        }
    }

    /// Whether a property of the given type belongs to this tab
    pub fn admits(&self, property_type: PropertyType) -> bool {
        match self {
            Category::All => true,
            Category::House => property_type == PropertyType::House,
            Category::Apartment => property_type == PropertyType::Apartment,
            Category::Commercial => property_type == PropertyType::Commercial,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter state of the listing screen
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchFilter {
    /// Free text matched against title and location
    pub query: String,
    /// Selected category tab
    pub category: Category,
    /// Minimum price (USD)
    pub min_price: Option<u64>,
    /// Maximum price (USD)
    pub max_price: Option<u64>,
    /// Minimum number of bedrooms
    pub min_bedrooms: Option<u32>,
}

impl SearchFilter {
    pub fn new(query: impl Into<String>, category: Category) -> Self {
        Self {
            query: query.into(),
            category,
            ..Self::default()
        }
    }

    /// Text-change event
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Tab-select event
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }
}
