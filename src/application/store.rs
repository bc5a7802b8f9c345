//! Quote store: the owned, persisted quote sequence
//!
//! Every mutation rewrites the persisted sequence wholesale, so the file on
//! disk always mirrors the in-memory state.

use crate::domain::{merge_quotes, MergeOutcome, Quote};
use crate::error::Result;
use crate::infrastructure::QuoteRepository;
use tracing::info;

pub struct QuoteStore<R: QuoteRepository> {
    repository: R,
    quotes: Vec<Quote>,
}

impl<R: QuoteRepository> QuoteStore<R> {
    /// Load the persisted quotes behind `repository`
    pub fn load(repository: R) -> Result<Self> {
        let quotes = repository.load_quotes()?;
        Ok(QuoteStore { repository, quotes })
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn append(&mut self, quote: Quote) -> Result<()> {
        self.append_all(vec![quote])
    }

    /// Append all quotes and persist once
    pub fn append_all(&mut self, quotes: Vec<Quote>) -> Result<()> {
        if quotes.is_empty() {
            return Ok(());
        }

        let count = quotes.len();
        let mut next = self.quotes.clone();
        next.extend(quotes);
        self.commit(next)?;

        info!(added = count, total = self.quotes.len(), "appended quotes");
        Ok(())
    }

    /// Merge candidates by text; persists only when something was added
    pub fn merge(&mut self, candidates: Vec<Quote>) -> Result<MergeOutcome> {
        let mut next = self.quotes.clone();
        let outcome = merge_quotes(&mut next, candidates);

        if outcome.changed() {
            self.commit(next)?;
            info!(added = outcome.added, total = self.quotes.len(), "merged quotes");
        }

        Ok(outcome)
    }

    /// Persist first, then swap in; a failed write leaves memory untouched
    fn commit(&mut self, next: Vec<Quote>) -> Result<()> {
        self.repository.save_quotes(&next)?;
        self.quotes = next;
        Ok(())
    }
}
