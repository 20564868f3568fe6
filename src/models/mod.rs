use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of property a listing describes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PropertyType {
    House,
    Apartment,
    Commercial,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Commercial => "Commercial",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Agent or owner listed as the contact for a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Owner {
    pub name: String,
    pub title: String,
    pub avatar: String,
    pub rating: f32,
    pub phone: String,
    pub email: String,
}

/// Core property data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub location: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub price: u64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Floor area in square feet
    pub area: u32,
    pub images: Vec<String>,
    pub description: String,
    pub amenities: Vec<String>,
    pub owner: Owner,
}

impl Property {
    /// Cover image shown on listing cards
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_type_field_from_catalog_json() {
        let json = r#"{
            "id": "9",
            "title": "Corner Shop",
            "location": "Austin, TX",
            "type": "Commercial",
            "price": 300000,
            "bedrooms": 0,
            "bathrooms": 1,
            "area": 900,
            "images": ["a.jpg", "b.jpg"],
            "description": "Small retail unit.",
            "amenities": ["Parking"],
            "owner": {
                "name": "Pat Lee",
                "title": "Broker",
                "avatar": "pat.jpg",
                "rating": 4.5,
                "phone": "+1 (555) 000-0000",
                "email": "pat@example.com"
            }
        }"#;

        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.property_type, PropertyType::Commercial);
        assert_eq!(property.primary_image(), Some("a.jpg"));

        let back = serde_json::to_value(&property).unwrap();
        assert_eq!(back["type"], "Commercial");
    }

    #[test]
    fn rejects_unknown_property_type() {
        let err = serde_json::from_str::<PropertyType>(r#""Castle""#);
        assert!(err.is_err());
    }
}
