//! Quote record

use crate::error::{QuoteError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single quote: text plus the category it is filed under.
///
/// Quotes carry no identifier. Two quotes are the "same" for merge purposes
/// when their `text` is exactly equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Quote {
            text: text.into(),
            category: category.into(),
        }
    }

    /// Build a quote from user input, trimming both fields.
    ///
    /// Fails when either field is empty after trimming.
    pub fn from_input(text: &str, category: &str) -> Result<Self> {
        let text = text.trim();
        let category = category.trim();

        if text.is_empty() || category.is_empty() {
            return Err(QuoteError::Validation(
                "Please enter both quote text and category".to_string(),
            ));
        }

        Ok(Quote::new(text, category))
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"\n— {}", self.text, self.category)
    }
}

/// Quotes a fresh quote book starts with.
pub fn default_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "The only way to do great work is to love what you do.",
            "Motivation",
        ),
        Quote::new(
            "Life is what happens when you're busy making other plans.",
            "Life",
        ),
        Quote::new(
            "In the middle of difficulty lies opportunity.",
            "Inspiration",
        ),
    ]
}
