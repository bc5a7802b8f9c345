//! Infrastructure layer - External I/O and persistence

mod atomic;
pub mod config;
pub mod remote;
pub mod repository;
pub mod sync_state;

pub use config::Config;
pub use remote::{HttpQuoteSource, QuoteSource};
pub use repository::{FileSystemRepository, QuoteRepository};
pub use sync_state::SyncState;
