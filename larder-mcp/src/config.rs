//! Server configuration from the environment

use std::env;
use std::path::PathBuf;
use larder_units::System;
use thiserror::Error;

pub const DATA_PATH_VAR: &str = "LARDER_DATA_PATH";
pub const SYSTEM_VAR: &str = "LARDER_SYSTEM";

const DEFAULT_DATA_PATH: &str = "./recipes";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding `*.json` recipe documents
    pub data_path: PathBuf,
    /// Display system used when a tool call does not name one
    pub system: System,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: {message}")]
    Invalid { var: &'static str, message: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_path = lookup(DATA_PATH_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let system = match lookup(SYSTEM_VAR) {
            Some(value) => value
                .parse::<System>()
                .map_err(|message| ConfigError::Invalid { var: SYSTEM_VAR, message })?,
            None => System::Imperial,
        };

        Ok(Config { data_path, system })
    }
}
