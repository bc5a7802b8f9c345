//! Remote quote server client

use crate::domain::Quote;
use crate::error::Result;
use crate::infrastructure::Config;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Where sync pulls candidate quotes from and pushes local quotes to
pub trait QuoteSource {
    /// Fetch candidate quotes from the server
    fn fetch(&self) -> Result<Vec<Quote>>;

    /// Send one local quote to the server
    fn publish(&self, quote: &Quote) -> Result<()>;
}

/// Item shape returned by the server; only `title` is used
#[derive(Debug, Deserialize)]
struct ServerItem {
    title: String,
}

/// Map raw server items to quotes: first `limit` items, fixed category.
fn items_to_quotes(items: Vec<ServerItem>, limit: usize, category: &str) -> Vec<Quote> {
    items
        .into_iter()
        .take(limit)
        .map(|item| Quote::new(item.title, category))
        .collect()
}

/// Blocking HTTP implementation of QuoteSource
pub struct HttpQuoteSource {
    http: Client,
    url: String,
    fetch_limit: usize,
    category: String,
}

impl HttpQuoteSource {
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(HttpQuoteSource {
            http,
            url: config.get_server_url(),
            fetch_limit: config.fetch_limit,
            category: config.server_category.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl QuoteSource for HttpQuoteSource {
    fn fetch(&self) -> Result<Vec<Quote>> {
        debug!(url = %self.url, "fetching server quotes");

        let items: Vec<ServerItem> = self
            .http
            .get(&self.url)
            .send()?
            .error_for_status()?
            .json()?;

        Ok(items_to_quotes(items, self.fetch_limit, &self.category))
    }

    fn publish(&self, quote: &Quote) -> Result<()> {
        self.http
            .post(&self.url)
            .json(quote)
            .send()?
            .error_for_status()?;
        Ok(())
    }
}
