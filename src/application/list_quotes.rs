//! List quotes and categories use cases

use crate::domain::{distinct_categories, CategoryFilter, Quote};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, QuoteRepository};

/// List quotes in the given subset without touching the remembered selection.
pub fn list_quotes(
    repository: &FileSystemRepository,
    filter: &CategoryFilter,
) -> Result<Vec<Quote>> {
    let quotes = repository.load_quotes()?;
    Ok(filter.apply(&quotes).into_iter().cloned().collect())
}

/// Distinct categories, in the order they first appear.
pub fn list_categories(repository: &FileSystemRepository) -> Result<Vec<String>> {
    let quotes = repository.load_quotes()?;
    Ok(distinct_categories(&quotes))
}
