//! Process configuration read from the environment at startup.

use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_CURRENT_USERNAME: &str = "bobbyjones";
/// Assets shipped with the crate; independent of the launch directory.
pub const DEFAULT_PUBLIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/public");

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub current_username: String,
    pub public_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "PORT",
                reason: e.to_string(),
            })?,
            None => {
                info!("PORT not set, using default: {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        };

        let database_url = lookup("DATABASE_URL")
            .or_else(|| lookup("MONGODB_URI"))
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let current_username = lookup("CURRENT_USERNAME")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENT_USERNAME.to_string());

        let public_dir = lookup("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR));

        Ok(Self {
            port,
            database_url,
            current_username,
            public_dir,
        })
    }
}
