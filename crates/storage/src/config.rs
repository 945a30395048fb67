use std::path::PathBuf;
use std::str::FromStr;

use exercise_catalog_domain as domain;

pub const CATALOG_PATH: &str = "EXERCISE_CATALOG_PATH";
pub const DEFAULT_LIMIT: &str = "EXERCISE_CATALOG_DEFAULT_LIMIT";
pub const MAX_LIMIT: &str = "EXERCISE_CATALOG_MAX_LIMIT";
pub const FUZZY_THRESHOLD: &str = "EXERCISE_CATALOG_FUZZY_THRESHOLD";

pub const DEFAULT_CATALOG_PATH: &str = "data/exercises.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub settings: domain::Settings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            settings: domain::Settings::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration from the variables returned by `lookup`. Unset variables fall
    /// back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup(CATALOG_PATH) {
            if path.trim().is_empty() {
                return Err(ConfigError::Empty(CATALOG_PATH));
            }
            config.catalog_path = PathBuf::from(path);
        }
        if let Some(value) = lookup(DEFAULT_LIMIT) {
            config.settings.default_limit = parse(DEFAULT_LIMIT, &value)?;
        }
        if let Some(value) = lookup(MAX_LIMIT) {
            config.settings.max_limit = parse(MAX_LIMIT, &value)?;
        }
        if let Some(value) = lookup(FUZZY_THRESHOLD) {
            let threshold = parse::<f64>(FUZZY_THRESHOLD, &value)?;
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::InvalidValue {
                    name: FUZZY_THRESHOLD,
                    value,
                    reason: "must be between 0 and 1".to_string(),
                });
            }
            config.settings.fuzzy_threshold = threshold;
        }

        Ok(config)
    }
}

fn parse<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|err: T::Err| ConfigError::InvalidValue {
            name,
            value: value.to_string(),
            reason: err.to_string(),
        })
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("invalid value for {name} `{value}`: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}
