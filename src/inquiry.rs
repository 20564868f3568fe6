//! Contact form sent to a property's owner.

use crate::models::Property;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::info;

/// How the inquirer would like to be contacted
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Phone,
    Email,
    #[default]
    Message,
}

impl fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContactMethod::Phone => "Phone",
            ContactMethod::Email => "Email",
            ContactMethod::Message => "Message",
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InquiryError {
    #[error("Please fill in all required fields. Missing: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

/// Unsubmitted contact form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub method: ContactMethod,
}

impl InquiryForm {
    /// Validate the form and turn it into an inquiry about `property`
    pub fn submit(self, property: &Property, now: DateTime<Utc>) -> Result<Inquiry, InquiryError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.message.trim().is_empty() {
            missing.push("message");
        }
        if !missing.is_empty() {
            return Err(InquiryError::MissingFields(missing));
        }

        let email = self.email.trim().to_string();
        if !is_plausible_email(&email) {
            return Err(InquiryError::InvalidEmail(email));
        }

        let phone = self
            .phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        info!("Inquiry about {} for {}", property.id, property.owner.name);

        Ok(Inquiry {
            property_id: property.id.clone(),
            property_title: property.title.clone(),
            owner_name: property.owner.name.clone(),
            name: self.name.trim().to_string(),
            email,
            phone,
            message: self.message.trim().to_string(),
            method: self.method,
            sent_at: now,
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// A submitted inquiry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Inquiry {
    pub property_id: String,
    pub property_title: String,
    pub owner_name: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub method: ContactMethod,
    pub sent_at: DateTime<Utc>,
}

impl Inquiry {
    pub fn confirmation(&self) -> String {
        format!(
            "Your message has been sent to {}. They will contact you soon.",
            self.owner_name
        )
    }
}
