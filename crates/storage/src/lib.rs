#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::path::Path;

use exercise_catalog_domain as domain;

pub mod config;
pub mod json;
pub mod source;

pub use config::{Config, ConfigError};
pub use source::{JsonBytes, JsonFile};

/// Loads the catalog from a JSON file using the default settings.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<domain::Service, domain::DataLoadError> {
    domain::Service::load(&JsonFile::new(path))
}

/// Loads the catalog from the configured JSON file.
pub fn load(config: &Config) -> Result<domain::Service, domain::DataLoadError> {
    domain::Service::load_with_settings(&JsonFile::new(&config.catalog_path), config.settings)
}
