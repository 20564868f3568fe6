//! Plain-text rendering of each screen.

use crate::favorites::FavoriteSet;
use crate::models::Property;
use crate::profile::{Profile, ProfileStats, MENU};
use crate::search::{Category, SearchFilter};

/// `1234567` -> `$1,234,567`
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn heart(favorites: &FavoriteSet, id: &str) -> &'static str {
    if favorites.contains(id) {
        "♥"
    } else {
        "♡"
    }
}

fn found_header(count: usize) -> String {
    if count == 1 {
        "1 Property Found".to_string()
    } else {
        format!("{count} Properties Found")
    }
}

fn category_tabs(selected: Category) -> String {
    Category::OPTIONS
        .iter()
        .map(|c| {
            if *c == selected {
                format!("[{c}]")
            } else {
                c.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn card(index: usize, property: &Property, favorites: &FavoriteSet) -> String {
    format!(
        "{}. {} {} ({})\n   📍 {}\n   {} · {} bd · {} ba · {} sqft\n   ID: {}\n",
        index,
        property.title,
        heart(favorites, &property.id),
        property.property_type,
        property.location,
        format_price(property.price),
        property.bedrooms,
        property.bathrooms,
        property.area,
        property.id
    )
}

/// Home screen: search state, category tabs and the matching cards
pub fn listing(results: &[&Property], filter: &SearchFilter, favorites: &FavoriteSet) -> String {
    let mut out = String::from("Find Your Dream Home\n");
    if !filter.query.is_empty() {
        out.push_str(&format!("Search: {}\n", filter.query));
    }
    out.push_str(&category_tabs(filter.category));
    out.push_str("\n\n");
    out.push_str(&found_header(results.len()));
    out.push('\n');

    if results.is_empty() {
        out.push_str("\nNo properties found\n");
        out.push_str("Try a different search term or category.\n");
        return out;
    }

    for (i, property) in results.iter().enumerate() {
        out.push('\n');
        out.push_str(&card(i + 1, property, favorites));
    }
    out
}

/// Detail screen for one property
pub fn detail(property: &Property, favorites: &FavoriteSet) -> String {
    let mut out = format!(
        "{} {}\n{}  [{}]\n📍 {}\n{} Bedrooms · {} Bathrooms · {} sqft\n",
        property.title,
        heart(favorites, &property.id),
        format_price(property.price),
        property.property_type,
        property.location,
        property.bedrooms,
        property.bathrooms,
        property.area
    );

    if let Some(image) = property.primary_image() {
        out.push_str(&format!("Image 1 / {}: {}\n", property.images.len(), image));
    }

    out.push_str(&format!("\nDescription\n{}\n", property.description));

    if !property.amenities.is_empty() {
        out.push_str(&format!("\nAmenities\n{}\n", property.amenities.join(", ")));
    }

    let owner = &property.owner;
    out.push_str(&format!(
        "\nListed by\n{} ({}) ★ {:.1}\nPhone: {}\nEmail: {}\n",
        owner.name, owner.title, owner.rating, owner.phone, owner.email
    ));
    out
}

/// Favorites screen
pub fn favorites(properties: &[&Property], favorites: &FavoriteSet) -> String {
    let mut out = String::from("My Favorites\n");

    if properties.is_empty() {
        out.push_str("\nNo Favorites Yet\n");
        out.push_str(
            "Start exploring properties and add them to your favorites to see them here.\n",
        );
        return out;
    }

    out.push_str(&format!("{} saved\n", properties.len()));
    for (i, property) in properties.iter().enumerate() {
        out.push('\n');
        out.push_str(&card(i + 1, property, favorites));
    }
    out
}

/// Profile screen
pub fn profile(profile: &Profile, stats: &ProfileStats) -> String {
    let mut out = format!(
        "Profile\n\n{}\n{}\n{}\nMember since {}\n\n",
        profile.name, profile.email, profile.phone, profile.member_since
    );
    out.push_str(&format!("{:>4}  Properties Viewed\n", stats.properties_viewed));
    out.push_str(&format!("{:>4}  Favorites\n", stats.favorites));
    out.push_str(&format!("{:>4}  Inquiries Sent\n", stats.inquiries_sent));
    out.push('\n');
    for (title, subtitle) in MENU {
        out.push_str(&format!("› {title} - {subtitle}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BuiltinCatalog, Catalog};

    #[test]
    fn formats_prices_with_thousands_separators() {
        assert_eq!(format_price(0), "$0");
        assert_eq!(format_price(999), "$999");
        assert_eq!(format_price(850_000), "$850,000");
        assert_eq!(format_price(2_500_000), "$2,500,000");
    }

    #[test]
    fn empty_listing_shows_empty_state() {
        let filter = SearchFilter::new("zzz-nomatch", Category::All);
        let out = listing(&[], &filter, &FavoriteSet::new());
        assert!(out.contains("0 Properties Found"));
        assert!(out.contains("No properties found"));
    }

    #[test]
    fn listing_marks_favorites_and_selected_tab() {
        let catalog = Catalog::from_properties(BuiltinCatalog::properties());
        let filter = SearchFilter::new("", Category::House);
        let results = catalog.search(&filter);
        let favorites: FavoriteSet = ["3"].into_iter().collect();

        let out = listing(&results, &filter, &favorites);
        assert!(out.contains("2 Properties Found"));
        assert!(out.contains("[House]"));
        assert!(out.contains("Suburban Family Home ♡"));
        assert!(out.contains("Luxury Family Villa ♥"));
    }

    #[test]
    fn single_result_uses_singular_header() {
        let catalog = Catalog::from_properties(BuiltinCatalog::properties());
        let filter = SearchFilter::new("Brooklyn", Category::All);
        let out = listing(&catalog.search(&filter), &filter, &FavoriteSet::new());
        assert!(out.contains("1 Property Found"));
        assert!(out.contains("Cozy Studio Apartment"));
    }

    #[test]
    fn detail_shows_owner_and_image_counter() {
        let catalog = Catalog::from_properties(BuiltinCatalog::properties());
        let out = detail(catalog.get("1").unwrap(), &FavoriteSet::new());
        assert!(out.contains("$850,000  [Apartment]"));
        assert!(out.contains("Image 1 / 3"));
        assert!(out.contains("Sarah Johnson (Real Estate Agent) ★ 4.8"));
        assert!(out.contains("Parking, WiFi, TV, Security"));
    }

    #[test]
    fn listing_card_layout() {
        let catalog = Catalog::from_properties(BuiltinCatalog::properties());
        let filter = SearchFilter::new("nyc", Category::Apartment);
        let out = listing(&catalog.search(&filter), &filter, &FavoriteSet::new());
        assert!(out.starts_with("Find Your Dream Home\nSearch: nyc\nAll  House  [Apartment]  Commercial\n\n"));
        assert!(out.ends_with(
            "1 Property Found\n\n\
             1. Modern Downtown Apartment ♡ (Apartment)\n   \
             📍 Downtown, NYC\n   \
             $850,000 · 2 bd · 2 ba · 1200 sqft\n   \
             ID: 1\n"
        ));
    }

    #[test]
    fn empty_favorites_shows_empty_state() {
        let out = favorites(&[], &FavoriteSet::new());
        assert!(out.contains("No Favorites Yet"));
    }

    #[test]
    fn profile_lists_stats_and_menu() {
        let stats = ProfileStats {
            properties_viewed: 3,
            favorites: 1,
            inquiries_sent: 2,
        };
        let out = profile(&Profile::default(), &stats);
        assert!(out.contains("John Anderson"));
        assert!(out.contains("   2  Inquiries Sent"));
        assert!(out.contains("› Help & Support - Get assistance"));
    }
}
