//! Application layer - Use cases and orchestration

pub mod add_quote;
pub mod import_export;
pub mod init;
pub mod list_quotes;
pub mod manage_config;
pub mod show_quote;
pub mod store;
pub mod sync;

pub use add_quote::AddQuoteService;
pub use import_export::{ImportExportService, ImportMode};
pub use manage_config::ConfigService;
pub use show_quote::{ShowOutcome, ShowQuoteService};
pub use store::QuoteStore;
pub use sync::{SyncReport, SyncService, WatchOptions};
