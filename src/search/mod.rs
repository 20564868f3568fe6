pub mod types;

pub use types::{Category, SearchFilter};

use crate::models::Property;

/// Filter the catalog down to what the listing screen shows.
///
/// A property is kept when its type belongs to the selected category and,
/// for a non-empty query, its title or location contains the query with
/// case folded. Price and bedroom bounds apply only when set. Catalog order
/// is preserved.
pub fn project<'a>(properties: &'a [Property], filter: &SearchFilter) -> Vec<&'a Property> {
    let needle = filter.query.to_lowercase();

    properties
        .iter()
        .filter(|p| filter.category.admits(p.property_type))
        .filter(|p| matches_text(p, &needle))
        .filter(|p| filter.min_price.map_or(true, |min| p.price >= min))
        .filter(|p| filter.max_price.map_or(true, |max| p.price <= max))
        .filter(|p| filter.min_bedrooms.map_or(true, |min| p.bedrooms >= min))
        .collect()
}

fn matches_text(property: &Property, needle: &str) -> bool {
    needle.is_empty()
        || property.title.to_lowercase().contains(needle)
        || property.location.to_lowercase().contains(needle)
}
