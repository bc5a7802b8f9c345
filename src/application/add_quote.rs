//! Add quote use case

use crate::application::QuoteStore;
use crate::domain::Quote;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;

/// Service for adding user-entered quotes
pub struct AddQuoteService {
    repository: FileSystemRepository,
}

impl AddQuoteService {
    pub fn new(repository: FileSystemRepository) -> Self {
        AddQuoteService { repository }
    }

    /// Validate and append a quote.
    ///
    /// Both fields are trimmed; an empty field is rejected before the store
    /// is touched.
    pub fn execute(&self, text: &str, category: &str) -> Result<Quote> {
        let quote = Quote::from_input(text, category)?;

        let mut store = QuoteStore::load(self.repository.clone())?;
        store.append(quote.clone())?;

        Ok(quote)
    }
}
