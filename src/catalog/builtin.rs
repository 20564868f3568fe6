use crate::catalog::traits::CatalogProvider;
use crate::models::{Owner, Property, PropertyType};
use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

/// The bundled sample catalog
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }

    /// The six sample listings, in display order
    pub fn properties() -> Vec<Property> {
        vec![
            Property {
                id: "1".to_string(),
                title: "Modern Downtown Apartment".to_string(),
                location: "Downtown, NYC".to_string(),
                property_type: PropertyType::Apartment,
                price: 850_000,
                bedrooms: 2,
                bathrooms: 2,
                area: 1200,
                images: pexels(&["1571460", "1743229", "1648776"]),
                description: "Beautiful modern apartment in the heart of downtown NYC. Features floor-to-ceiling windows, hardwood floors, and stunning city views. Recently renovated with high-end finishes throughout. Perfect for urban professionals seeking luxury living.".to_string(),
                amenities: tags(&["Parking", "WiFi", "TV", "Security"]),
                owner: Owner {
                    name: "Sarah Johnson".to_string(),
                    title: "Real Estate Agent".to_string(),
                    avatar: avatar("1587009"),
                    rating: 4.8,
                    phone: "+1 (555) 123-4567".to_string(),
                    email: "sarah.johnson@realty.com".to_string(),
                },
            },
            Property {
                id: "2".to_string(),
                title: "Suburban Family Home".to_string(),
                location: "Westchester, NY".to_string(),
                property_type: PropertyType::House,
                price: 675_000,
                bedrooms: 4,
                bathrooms: 3,
                area: 2500,
                images: pexels(&["106399", "1571453", "1648771"]),
                description: "Spacious family home in quiet suburban neighborhood. Features a large backyard, modern kitchen, and open floor plan perfect for entertaining. Close to excellent schools and parks. Move-in ready with recent updates throughout.".to_string(),
                amenities: tags(&["Parking", "WiFi", "Security"]),
                owner: Owner {
                    name: "Michael Chen".to_string(),
                    title: "Property Owner".to_string(),
                    avatar: avatar("1222271"),
                    rating: 4.9,
                    phone: "+1 (555) 987-6543".to_string(),
                    email: "michael.chen@email.com".to_string(),
                },
            },
            Property {
                id: "3".to_string(),
                title: "Luxury Family Villa".to_string(),
                location: "Beverly Hills, CA".to_string(),
                property_type: PropertyType::House,
                price: 2_500_000,
                bedrooms: 5,
                bathrooms: 4,
                area: 4500,
                images: pexels(&["1396122", "1396132", "259588"]),
                description: "Stunning luxury villa in prestigious Beverly Hills location. Features pool, spa, wine cellar, and panoramic city views. Meticulously maintained with premium finishes and smart home technology throughout. Perfect for luxury living and entertaining.".to_string(),
                amenities: tags(&["Parking", "WiFi", "TV", "Security"]),
                owner: Owner {
                    name: "Emma Rodriguez".to_string(),
                    title: "Luxury Real Estate Specialist".to_string(),
                    avatar: avatar("1130626"),
                    rating: 5.0,
                    phone: "+1 (555) 456-7890".to_string(),
                    email: "emma.rodriguez@luxuryrealty.com".to_string(),
                },
            },
            Property {
                id: "4".to_string(),
                title: "Cozy Studio Apartment".to_string(),
                location: "Brooklyn, NY".to_string(),
                property_type: PropertyType::Apartment,
                price: 420_000,
                bedrooms: 1,
                bathrooms: 1,
                area: 600,
                images: pexels(&["1457842", "1571468"]),
                description: "Charming studio apartment in trendy Brooklyn neighborhood. Features exposed brick walls, high ceilings, and updated kitchen. Walking distance to subway, restaurants, and shops. Perfect for first-time buyers or investors.".to_string(),
                amenities: tags(&["WiFi", "Security"]),
                owner: Owner {
                    name: "David Park".to_string(),
                    title: "Real Estate Investor".to_string(),
                    avatar: avatar("937481"),
                    rating: 4.7,
                    phone: "+1 (555) 234-5678".to_string(),
                    email: "david.park@investments.com".to_string(),
                },
            },
            Property {
                id: "5".to_string(),
                title: "Commercial Office Space".to_string(),
                location: "Manhattan, NY".to_string(),
                property_type: PropertyType::Commercial,
                price: 1_200_000,
                bedrooms: 0,
                bathrooms: 2,
                area: 1800,
                images: pexels(&["380769", "1181406"]),
                description: "Prime commercial office space in prestigious Manhattan location. Features modern conference rooms, open workspace areas, and premium finishes. Excellent transportation access and nearby amenities. Perfect for growing businesses.".to_string(),
                amenities: tags(&["Parking", "WiFi", "Security"]),
                owner: Owner {
                    name: "Jennifer Walsh".to_string(),
                    title: "Commercial Real Estate Broker".to_string(),
                    avatar: avatar("1239291"),
                    rating: 4.6,
                    phone: "+1 (555) 345-6789".to_string(),
                    email: "jennifer.walsh@commercial.com".to_string(),
                },
            },
            Property {
                id: "6".to_string(),
                title: "Waterfront Condo".to_string(),
                location: "Miami Beach, FL".to_string(),
                property_type: PropertyType::Apartment,
                price: 950_000,
                bedrooms: 3,
                bathrooms: 2,
                area: 1600,
                images: pexels(&["1643383", "1571471"]),
                description: "Spectacular waterfront condominium with direct ocean views. Features private balcony, marble floors, and resort-style amenities including pool, gym, and concierge. Walking distance to South Beach attractions and fine dining.".to_string(),
                amenities: tags(&["Parking", "WiFi", "TV", "Security"]),
                owner: Owner {
                    name: "Carlos Martinez".to_string(),
                    title: "Waterfront Property Specialist".to_string(),
                    avatar: avatar("1040880"),
                    rating: 4.9,
                    phone: "+1 (555) 567-8901".to_string(),
                    email: "carlos.martinez@waterfront.com".to_string(),
                },
            },
        ]
    }
}

#[async_trait]
impl CatalogProvider for BuiltinCatalog {
    async fn fetch(&self) -> Result<Vec<Property>> {
        let properties = Self::properties();
        debug!("Loaded {} built-in properties", properties.len());
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "builtin"
    }
}

fn pexels(photo_ids: &[&str]) -> Vec<String> {
    photo_ids
        .iter()
        .map(|id| format!("https://images.pexels.com/photos/{id}/pexels-photo-{id}.jpeg"))
        .collect()
}

fn avatar(photo_id: &str) -> String {
    format!(
        "https://images.pexels.com/photos/{id}/pexels-photo-{id}.jpeg?auto=compress&cs=tinysrgb&w=200&h=200&dpr=2",
        id = photo_id
    )
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_catalog_has_six_unique_records() {
        let properties = BuiltinCatalog::properties();
        assert_eq!(properties.len(), 6);

        let ids: HashSet<_> = properties.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 6);
        assert!(properties.iter().all(|p| !p.images.is_empty()));
    }

    #[test]
    fn image_urls_follow_pexels_layout() {
        let properties = BuiltinCatalog::properties();
        assert_eq!(
            properties[0].images[0],
            "https://images.pexels.com/photos/1571460/pexels-photo-1571460.jpeg"
        );
        assert!(properties[0].owner.avatar.ends_with("w=200&h=200&dpr=2"));
    }
}
