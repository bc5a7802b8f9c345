//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_category_list, format_filter_heading, format_quote_list, format_shown_quote,
    format_sync_report, format_sync_state,
};
