pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod favorites;
pub mod inquiry;
pub mod models;
pub mod profile;
pub mod render;
pub mod search;
pub mod state;

pub use app::App;
pub use catalog::{Catalog, CatalogProvider};
pub use config::Config;
pub use favorites::FavoriteSet;
pub use models::{Owner, Property, PropertyType};
pub use search::{project, Category, SearchFilter};
