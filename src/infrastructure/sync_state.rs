//! Record of the last sync pass

use crate::error::Result;
use crate::infrastructure::atomic::write_atomic;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncState {
    pub last_sync: Option<DateTime<Utc>>,
    pub last_added: usize,
    /// Whether the last fetch reached the server
    pub last_fetch_ok: bool,
}

impl SyncState {
    /// Load from .quotebook/sync.toml, defaulting when the file is absent
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let state_path = path.join(".quotebook").join("sync.toml");
        if !state_path.exists() {
            return Ok(SyncState::default());
        }

        let contents = fs::read_to_string(&state_path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let state_path = path.join(".quotebook").join("sync.toml");
        write_atomic(&state_path, &toml::to_string_pretty(self)?)
    }
}
