//! File system repository

use crate::domain::{CategoryFilter, Quote};
use crate::error::{QuoteError, Result};
use crate::infrastructure::atomic::write_atomic;
use crate::infrastructure::{Config, SyncState};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const META_DIR: &str = ".quotebook";
const QUOTES_FILE: &str = "quotes.json";
const SELECTED_CATEGORY_FILE: &str = "selected_category";

/// Abstract repository for quote book persistence
pub trait QuoteRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .quotebook/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .quotebook/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .quotebook directory exists
    fn is_initialized(&self) -> bool;

    /// Create .quotebook directory structure
    fn initialize(&self) -> Result<()>;

    /// Load the persisted quote sequence (empty when nothing was saved yet)
    fn load_quotes(&self) -> Result<Vec<Quote>>;

    /// Replace the persisted quote sequence wholesale
    fn save_quotes(&self, quotes: &[Quote]) -> Result<()>;

    /// Load the last selected category filter
    fn load_selected_category(&self) -> Result<CategoryFilter>;

    /// Remember the selected category filter
    fn save_selected_category(&self, filter: &CategoryFilter) -> Result<()>;
}

/// File system implementation of QuoteRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the quote book root by walking up from current directory
    /// First checks QUOTEBOOK_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("QUOTEBOOK_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_meta_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(QuoteError::Config(format!(
                    "QUOTEBOOK_ROOT is set to '{}' but no .quotebook directory found. \
                    Run 'quotebook init' in that directory or unset QUOTEBOOK_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the quote book root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_meta_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(QuoteError::NotQuotebookDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_meta_dir(path: &Path) -> bool {
        path.join(META_DIR).is_dir()
    }

    fn meta_path(&self, name: &str) -> PathBuf {
        self.root.join(META_DIR).join(name)
    }

    /// Load the record of the last sync pass
    pub fn load_sync_state(&self) -> Result<SyncState> {
        SyncState::load_from_dir(&self.root)
    }

    pub fn save_sync_state(&self, state: &SyncState) -> Result<()> {
        SyncState::save_to_dir(state, &self.root)
    }
}

impl QuoteRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_meta_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let meta_dir = self.root.join(META_DIR);

        if meta_dir.exists() {
            return Err(QuoteError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&meta_dir)?;
        Ok(())
    }

    fn load_quotes(&self) -> Result<Vec<Quote>> {
        let path = self.meta_path(QUOTES_FILE);

        if !path.exists() {
            debug!(path = %path.display(), "no stored quotes, starting empty");
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path)?;
        let quotes: Vec<Quote> =
            serde_json::from_str(&contents).map_err(|source| QuoteError::CorruptStore {
                path: path.clone(),
                source,
            })?;

        debug!(count = quotes.len(), "loaded quotes");
        Ok(quotes)
    }

    fn save_quotes(&self, quotes: &[Quote]) -> Result<()> {
        let contents = serde_json::to_string_pretty(quotes)?;
        write_atomic(&self.meta_path(QUOTES_FILE), &contents)?;
        debug!(count = quotes.len(), "saved quotes");
        Ok(())
    }

    fn load_selected_category(&self) -> Result<CategoryFilter> {
        let path = self.meta_path(SELECTED_CATEGORY_FILE);

        if !path.exists() {
            return Ok(CategoryFilter::All);
        }

        let contents = fs::read_to_string(&path)?;
        Ok(contents.parse().unwrap_or_default())
    }

    fn save_selected_category(&self, filter: &CategoryFilter) -> Result<()> {
        write_atomic(&self.meta_path(SELECTED_CATEGORY_FILE), &filter.to_string())
    }
}
