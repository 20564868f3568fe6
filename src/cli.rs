use crate::inquiry::{ContactMethod, InquiryForm};
use crate::search::{Category, SearchFilter};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "estate-scout", version, about = "Browse property listings from the terminal")]
pub struct Cli {
    /// Config file (defaults to ./estate-scout.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog source: `builtin`, a JSON file, or an http(s) URL
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    /// User state file
    #[arg(long, global = true)]
    pub state: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search and filter listings
    List(ListArgs),
    /// Show one property in detail
    Show { id: String },
    /// Toggle a property's favorite mark
    Favorite { id: String },
    /// Remove a property from favorites
    Unfavorite { id: String },
    /// List favorite properties
    Favorites,
    /// Send an inquiry to a property's owner
    Contact(ContactArgs),
    /// Show the user profile
    Profile,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Text matched against title and location
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// All, House, Apartment or Commercial
    #[arg(short = 't', long = "type", default_value = "All")]
    pub category: String,

    #[arg(long)]
    pub min_price: Option<u64>,

    #[arg(long)]
    pub max_price: Option<u64>,

    #[arg(long)]
    pub min_bedrooms: Option<u32>,

    /// Print matching records as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn filter(&self) -> SearchFilter {
        let mut filter = SearchFilter::default();
        filter.set_query(self.query.as_str());
        filter.set_category(Category::from_input(&self.category));
        filter.min_price = self.min_price;
        filter.max_price = self.max_price;
        filter.min_bedrooms = self.min_bedrooms;
        filter
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MethodArg {
    Phone,
    Email,
    Message,
}

impl From<MethodArg> for ContactMethod {
    fn from(value: MethodArg) -> Self {
        match value {
            MethodArg::Phone => ContactMethod::Phone,
            MethodArg::Email => ContactMethod::Email,
            MethodArg::Message => ContactMethod::Message,
        }
    }
}

#[derive(Debug, Args)]
pub struct ContactArgs {
    pub id: String,

    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long, default_value = "")]
    pub message: String,

    /// Preferred contact method
    #[arg(long, value_enum, default_value = "message")]
    pub method: MethodArg,
}

impl ContactArgs {
    pub fn form(&self) -> InquiryForm {
        InquiryForm {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            message: self.message.clone(),
            method: self.method.into(),
        }
    }
}
