//! Initialize quote book use case

use crate::application::QuoteStore;
use crate::domain::default_quotes;
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, QuoteRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new quote book at the specified path.
///
/// Seeds the starter quotes unless `empty` is set.
pub fn init(path: &Path, empty: bool) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::default())?;

    let mut store = QuoteStore::load(repo)?;
    if empty {
        store.repository().save_quotes(&[])?;
    } else {
        store.append_all(default_quotes())?;
    }

    info!(path = %path.display(), quotes = store.len(), "initialized quote book");
    println!("Initialized quote book at {}", path.display());
    println!("Quotes: {}", store.len());

    Ok(())
}
