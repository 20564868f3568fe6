use crate::state::UserState;
use serde::{Deserialize, Serialize};

/// Identity shown on the profile screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar: String,
    pub member_since: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "John Anderson".to_string(),
            email: "john.anderson@email.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            avatar: "https://images.pexels.com/photos/1043471/pexels-photo-1043471.jpeg?auto=compress&cs=tinysrgb&w=200&h=200&dpr=2".to_string(),
            member_since: "2023".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileStats {
    pub properties_viewed: usize,
    pub favorites: usize,
    pub inquiries_sent: usize,
}

impl ProfileStats {
    pub fn from_state(state: &UserState) -> Self {
        Self {
            properties_viewed: state.viewed.len(),
            favorites: state.favorites.len(),
            inquiries_sent: state.inquiries.len(),
        }
    }
}

/// Profile menu entries as (title, subtitle)
pub const MENU: [(&str, &str); 5] = [
    ("My Properties", "Manage your listings"),
    ("Saved Searches", "Your search criteria"),
    ("Notifications", "Alerts and updates"),
    ("Settings", "App preferences"),
    ("Help & Support", "Get assistance"),
];
