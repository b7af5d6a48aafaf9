use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::warn;

use crate::modules::content::application::{
    domain::{defaults, entities::ContentDocument},
    ports::outgoing::{KeyValueError, KeyValueStore},
};

pub const PROJECTS_KEY: &str = "portfolio_projects";
pub const GRAPHICS_KEY: &str = "portfolio_graphics";
pub const REVIEWS_KEY: &str = "portfolio_reviews";
pub const SERVICES_KEY: &str = "portfolio_services";
pub const CONTACT_KEY: &str = "portfolio_contact";
pub const ABOUT_KEY: &str = "portfolio_about";

/// Typed view over the key/value store: one JSON value per top-level
/// document field.
#[derive(Clone)]
pub struct LocalContentStore {
    store: Arc<dyn KeyValueStore>,
}

impl LocalContentStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read the document, using the built-in default for any key that is
    /// missing or cannot be parsed.
    pub fn load_document(&self) -> ContentDocument {
        ContentDocument {
            projects: self.read_or(PROJECTS_KEY, defaults::default_projects),
            graphics: self.read_or(GRAPHICS_KEY, defaults::default_graphics),
            reviews: self.read_or(REVIEWS_KEY, defaults::default_reviews),
            service_details: self.read_or(SERVICES_KEY, defaults::default_service_details),
            contact_info: self.read_or(CONTACT_KEY, defaults::default_contact_info),
            about_data: self.read_or(ABOUT_KEY, defaults::default_about_data),
        }
    }

    pub fn save_document(&self, document: &ContentDocument) -> Result<(), KeyValueError> {
        self.write(PROJECTS_KEY, &document.projects)?;
        self.write(GRAPHICS_KEY, &document.graphics)?;
        self.write(REVIEWS_KEY, &document.reviews)?;
        self.write(SERVICES_KEY, &document.service_details)?;
        self.write(CONTACT_KEY, &document.contact_info)?;
        self.write(ABOUT_KEY, &document.about_data)
    }

    fn read_or<T, F>(&self, key: &str, default: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.store.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    warn!(key, error = %e, "Stored value is malformed, using default");
                    default()
                }
            },
            Ok(None) => default(),
            Err(e) => {
                warn!(key, error = %e, "Failed to read local store, using default");
                default()
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), KeyValueError> {
        let raw = serde_json::to_string(value)
            .map_err(|e| KeyValueError::Serialization(e.to_string()))?;
        self.store.set(key, &raw)
    }
}
