//! quotebook - Terminal quote book
//!
//! Keeps a categorized collection of quotes in a directory, shows random
//! quotes, imports and exports JSON, and merges quotes from a remote server.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::QuoteError;
