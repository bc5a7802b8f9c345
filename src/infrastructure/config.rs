//! Configuration management

use crate::error::{QuoteError, Result};
use crate::infrastructure::atomic::write_atomic;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_SERVER_URL: &str = "https://jsonplaceholder.typicode.com/posts";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Endpoint polled for server quotes and posted to on push
    pub server_url: String,
    /// How many server items are turned into quotes per sync
    pub fetch_limit: usize,
    /// Category assigned to every quote coming from the server
    pub server_category: String,
    pub sync_interval_secs: u64,
    pub request_timeout_secs: u64,
    /// Post local quotes back to the server after each sync
    pub push_on_sync: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_url: DEFAULT_SERVER_URL.to_string(),
            fetch_limit: 5,
            server_category: "Server".to_string(),
            sync_interval_secs: 30,
            request_timeout_secs: 10,
            push_on_sync: true,
        }
    }
}

impl Config {
    /// Load config from .quotebook/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".quotebook").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                QuoteError::NotQuotebookDirectory(path.to_path_buf())
            } else {
                QuoteError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| QuoteError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .quotebook/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let meta_dir = path.join(".quotebook");
        let config_path = meta_dir.join("config.toml");

        if !meta_dir.exists() {
            fs::create_dir(&meta_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| QuoteError::Config(format!("Failed to serialize config: {}", e)))?;

        write_atomic(&config_path, &contents)
    }

    /// Server URL, with QUOTEBOOK_SERVER_URL taking precedence over the stored value
    pub fn get_server_url(&self) -> String {
        std::env::var("QUOTEBOOK_SERVER_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| self.server_url.clone())
    }

    /// Names accepted by `get`/`set`
    pub const KEYS: [&'static str; 6] = [
        "server_url",
        "fetch_limit",
        "server_category",
        "sync_interval_secs",
        "request_timeout_secs",
        "push_on_sync",
    ];

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "server_url" => Ok(self.server_url.clone()),
            "fetch_limit" => Ok(self.fetch_limit.to_string()),
            "server_category" => Ok(self.server_category.clone()),
            "sync_interval_secs" => Ok(self.sync_interval_secs.to_string()),
            "request_timeout_secs" => Ok(self.request_timeout_secs.to_string()),
            "push_on_sync" => Ok(self.push_on_sync.to_string()),
            _ => Err(Self::unknown_key(key)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "server_url" => {
                let value = value.trim();
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(QuoteError::Config(format!(
                        "Invalid server_url: '{}'. Must start with http:// or https://",
                        value
                    )));
                }
                self.server_url = value.to_string();
            }
            "fetch_limit" => self.fetch_limit = parse_number(key, value)?,
            "server_category" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(QuoteError::Config(
                        "server_category cannot be empty".to_string(),
                    ));
                }
                self.server_category = value.to_string();
            }
            "sync_interval_secs" => {
                let secs: u64 = parse_number(key, value)?;
                if secs == 0 {
                    return Err(QuoteError::Config(
                        "sync_interval_secs must be at least 1".to_string(),
                    ));
                }
                self.sync_interval_secs = secs;
            }
            "request_timeout_secs" => {
                let secs: u64 = parse_number(key, value)?;
                if secs == 0 {
                    return Err(QuoteError::Config(
                        "request_timeout_secs must be at least 1".to_string(),
                    ));
                }
                self.request_timeout_secs = secs;
            }
            "push_on_sync" => {
                self.push_on_sync = value.trim().parse().map_err(|_| {
                    QuoteError::Config(format!(
                        "Invalid value for push_on_sync: '{}'. Use true or false",
                        value
                    ))
                })?;
            }
            _ => return Err(Self::unknown_key(key)),
        }
        Ok(())
    }

    fn unknown_key(key: &str) -> QuoteError {
        QuoteError::Config(format!(
            "Unknown config key: '{}'. Valid keys are: {}",
            key,
            Self::KEYS.join(", ")
        ))
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        QuoteError::Config(format!(
            "Invalid value for {}: '{}'. Expected a non-negative integer",
            key, value
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
        assert_eq!(config.fetch_limit, 5);
        assert_eq!(config.server_category, "Server");
        assert!(config.push_on_sync);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.fetch_limit = 8;

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".quotebook").exists());
        assert!(temp.path().join(".quotebook/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            QuoteError::NotQuotebookDirectory(_) => {}
            other => panic!("Expected NotQuotebookDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_replaces_config_without_leftovers() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.save_to_dir(temp.path()).unwrap();

        config.fetch_limit = 2;
        config.save_to_dir(temp.path()).unwrap();

        let names: Vec<String> = fs::read_dir(temp.path().join(".quotebook"))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["config.toml".to_string()]);
        assert_eq!(Config::load_from_dir(temp.path()).unwrap().fetch_limit, 2);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".quotebook")).unwrap();
        fs::write(
            temp.path().join(".quotebook/config.toml"),
            "fetch_limit = 2\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.fetch_limit, 2);
        assert_eq!(loaded.server_url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_invalid_config_is_config_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".quotebook")).unwrap();
        fs::write(temp.path().join(".quotebook/config.toml"), "fetch_limit = ").unwrap();

        let err = Config::load_from_dir(temp.path()).unwrap_err();
        assert!(matches!(err, QuoteError::Config(_)));
    }

    #[test]
    fn test_get_and_set() {
        let mut config = Config::default();

        config.set("fetch_limit", "3").unwrap();
        config.set("push_on_sync", "false").unwrap();
        config.set("server_category", " Remote ").unwrap();

        assert_eq!(config.get("fetch_limit").unwrap(), "3");
        assert_eq!(config.get("push_on_sync").unwrap(), "false");
        assert_eq!(config.get("server_category").unwrap(), "Remote");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();

        assert!(config.set("fetch_limit", "-1").is_err());
        assert!(config.set("sync_interval_secs", "0").is_err());
        assert!(config.set("request_timeout_secs", "0").is_err());
        assert!(config.set("server_url", "ftp://example.com").is_err());
        assert!(config.set("push_on_sync", "maybe").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_key() {
        let config = Config::default();
        let err = config.get("editor").unwrap_err();
        assert!(err.to_string().contains("Unknown config key: 'editor'"));
    }
}
