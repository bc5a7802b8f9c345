//! Show random quote and category selection use cases

use crate::domain::{pick_random, CategoryFilter, Quote};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, QuoteRepository};
use rand::Rng;
use tracing::debug;

/// What the renderer ended up showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowOutcome {
    pub filter: CategoryFilter,
    /// `None` when the active subset is empty
    pub quote: Option<Quote>,
}

/// Service for displaying quotes and managing the selected category
pub struct ShowQuoteService {
    repository: FileSystemRepository,
}

impl ShowQuoteService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ShowQuoteService { repository }
    }

    /// Resolve the active filter: an explicit category is remembered,
    /// otherwise the last remembered selection applies.
    fn resolve_filter(&self, category: Option<&str>) -> Result<CategoryFilter> {
        match category {
            Some(raw) => {
                let filter: CategoryFilter = raw.parse().unwrap_or_default();
                self.repository.save_selected_category(&filter)?;
                debug!(filter = %filter, "selected category");
                Ok(filter)
            }
            None => self.repository.load_selected_category(),
        }
    }

    /// Pick one random quote from the active subset.
    pub fn execute<R: Rng + ?Sized>(
        &self,
        category: Option<&str>,
        rng: &mut R,
    ) -> Result<ShowOutcome> {
        let filter = self.resolve_filter(category)?;
        let quotes = self.repository.load_quotes()?;
        let quote = pick_random(&quotes, &filter, rng).cloned();

        Ok(ShowOutcome { filter, quote })
    }

    /// Remember `category` as the selection and return the active subset.
    pub fn select(&self, category: &str) -> Result<(CategoryFilter, Vec<Quote>)> {
        let filter = self.resolve_filter(Some(category))?;
        let quotes = self.repository.load_quotes()?;
        let active = filter.apply(&quotes).into_iter().cloned().collect();

        Ok((filter, active))
    }
}
