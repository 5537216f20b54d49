//! Process configuration, read once from the environment at startup.

use log::info;
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// SQLite database file holding the feedback collection.
    pub db_path: PathBuf,
    /// Maximum accepted JSON body size in bytes.
    pub json_limit: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid {key} value '{value}': {reason}")]
pub struct ConfigError {
    key: &'static str,
    value: String,
    reason: String,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: try_load(&lookup, "FEEDBACK_HOST", "127.0.0.1")?,
            port: try_load(&lookup, "FEEDBACK_PORT", "8080")?,
            db_path: try_load(&lookup, "FEEDBACK_DB_PATH", "feedback.sqlite")?,
            json_limit: try_load(&lookup, "FEEDBACK_JSON_LIMIT", "65536")?,
        })
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    match value.trim().parse() {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}
