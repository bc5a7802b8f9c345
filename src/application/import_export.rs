//! Import and export of the quote book as a JSON array

use crate::application::QuoteStore;
use crate::domain::Quote;
use crate::error::{QuoteError, Result};
use crate::infrastructure::{FileSystemRepository, QuoteRepository};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

/// How imported quotes are combined with the existing ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    /// Append every imported quote
    #[default]
    Append,
    /// Append only quotes whose text is not already present
    SkipDuplicates,
}

/// Parse an import document.
///
/// The top-level value must be an array and every element a quote record;
/// otherwise nothing is returned.
pub fn parse_import(contents: &str) -> Result<Vec<Quote>> {
    let value: Value = serde_json::from_str(contents)
        .map_err(|e| QuoteError::InvalidImport(format!("malformed JSON: {}", e)))?;

    let Value::Array(items) = value else {
        return Err(QuoteError::InvalidImport(
            "expected a JSON array of quotes at the top level".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            serde_json::from_value(item).map_err(|e| {
                QuoteError::InvalidImport(format!("entry {} is not a quote: {}", idx, e))
            })
        })
        .collect()
}

/// Service for moving quotes in and out of the book
pub struct ImportExportService {
    repository: FileSystemRepository,
}

impl ImportExportService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ImportExportService { repository }
    }

    /// Import quotes from a JSON file; returns how many were added.
    pub fn import(&self, path: &Path, mode: ImportMode) -> Result<usize> {
        let contents = fs::read_to_string(path)?;
        let imported = parse_import(&contents)?;
        let total = imported.len();

        let mut store = QuoteStore::load(self.repository.clone())?;
        let added = match mode {
            ImportMode::Append => {
                store.append_all(imported)?;
                total
            }
            ImportMode::SkipDuplicates => store.merge(imported)?.added,
        };

        info!(path = %path.display(), total, added, "imported quotes");
        Ok(added)
    }

    /// Render the whole book as a pretty JSON array
    pub fn export_json(&self) -> Result<String> {
        let quotes = self.repository.load_quotes()?;
        Ok(serde_json::to_string_pretty(&quotes)?)
    }

    /// Write the whole book to `path`; returns the number of quotes written.
    pub fn export_to(&self, path: &Path) -> Result<usize> {
        let quotes = self.repository.load_quotes()?;
        fs::write(path, serde_json::to_string_pretty(&quotes)?)?;

        info!(path = %path.display(), count = quotes.len(), "exported quotes");
        Ok(quotes.len())
    }
}
