//! Config management use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, QuoteRepository};

/// Service for managing quote book configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        self.repository.load_config()?.get(key)
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;
        config.set(key, value)?;
        self.repository.save_config(&config)
    }

    /// All config values as (key, value) pairs, in declaration order
    pub fn list(&self) -> Result<Vec<(&'static str, String)>> {
        let config: Config = self.repository.load_config()?;
        Config::KEYS
            .iter()
            .map(|key| Ok((*key, config.get(key)?)))
            .collect()
    }
}
