//! Output formatting utilities

use crate::application::SyncReport;
use crate::domain::{CategoryFilter, Quote};
use crate::infrastructure::SyncState;

pub const EMPTY_CATEGORY_MESSAGE: &str = "No quotes available for this category.";

/// Format the quote shown by the renderer, or the empty display state
pub fn format_shown_quote(quote: Option<&Quote>) -> String {
    match quote {
        Some(quote) => quote.to_string(),
        None => EMPTY_CATEGORY_MESSAGE.to_string(),
    }
}

/// Format a list of quotes for display
pub fn format_quote_list(quotes: &[Quote]) -> String {
    if quotes.is_empty() {
        return EMPTY_CATEGORY_MESSAGE.to_string();
    }

    let mut output = String::new();
    for quote in quotes {
        output.push_str(&format!("[{}] {}\n", quote.category, quote.text));
    }
    output
}

/// Format a list of categories for display.
pub fn format_category_list(categories: &[String]) -> String {
    if categories.is_empty() {
        return "No categories found".to_string();
    }

    let mut output = String::new();
    for category in categories {
        output.push_str(category);
        output.push('\n');
    }
    output
}

/// Heading printed when the filter changes
pub fn format_filter_heading(filter: &CategoryFilter, count: usize) -> String {
    match filter {
        CategoryFilter::All => format!("Showing all quotes ({})", count),
        CategoryFilter::Only(category) => format!("Showing '{}' ({})", category, count),
    }
}

/// Summary line for a sync pass
pub fn format_sync_report(report: &SyncReport) -> String {
    let mut output = match report.fetched {
        None => "Could not reach server; local quotes unchanged.".to_string(),
        Some(_) if report.changed() => {
            format!("Quotes synced with server: {} new.", report.added)
        }
        Some(_) => "Quotes are up to date with server.".to_string(),
    };

    if report.pushed > 0 || report.push_failures > 0 {
        output.push_str(&format!(
            " Posted {} quote(s), {} failed.",
            report.pushed, report.push_failures
        ));
    }
    output
}

/// Format the recorded sync state
pub fn format_sync_state(state: &SyncState) -> String {
    match state.last_sync {
        None => "Never synced".to_string(),
        Some(at) => format!(
            "Last sync: {}\nServer reachable: {}\nQuotes added: {}",
            at.to_rfc3339(),
            if state.last_fetch_ok { "yes" } else { "no" },
            state.last_added
        ),
    }
}
