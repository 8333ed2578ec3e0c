//! Config management use case

use crate::error::{JournalError, Result};
use crate::infrastructure::logging::is_valid_level;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::net::SocketAddr;
use std::path::PathBuf;

const VALID_KEYS: &str = "database, bind, log_level";

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "database" => Ok(config.database.display().to_string()),
            "bind" => Ok(config.bind),
            "log_level" => Ok(config.log_level),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "database" => {
                if value.trim().is_empty() {
                    return Err(JournalError::Config(
                        "database path cannot be empty".to_string(),
                    ));
                }
                config.database = PathBuf::from(value);
            }
            "bind" => {
                value.parse::<SocketAddr>().map_err(|_| {
                    JournalError::Config(format!(
                        "Invalid bind address: '{}'. Expected host:port, e.g. 127.0.0.1:3000",
                        value
                    ))
                })?;
                config.bind = value.to_string();
            }
            "log_level" => {
                if !is_valid_level(value) {
                    return Err(JournalError::Config(format!(
                        "Invalid log level: '{}'. Use trace, debug, info, warn or error",
                        value
                    )));
                }
                config.log_level = value.to_string();
            }
            _ => return Err(unknown_key(key)),
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn unknown_key(key: &str) -> JournalError {
    JournalError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, VALID_KEYS
    ))
}
