//! Error types for quotebook

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for quotebook
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Not a quotebook directory: {0}")]
    NotQuotebookDirectory(PathBuf),

    #[error("{0}")]
    Validation(String),

    #[error("Invalid import file: {0}")]
    InvalidImport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt quote store {}: {source}", .path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl QuoteError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            QuoteError::NotQuotebookDirectory(_) => 2,
            QuoteError::Validation(_) => 3,
            QuoteError::InvalidImport(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            QuoteError::NotQuotebookDirectory(path) => {
                format!(
                    "Not a quotebook directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'quotebook init' in this directory to create a new quote book\n\
                    • Navigate to an existing quotebook directory\n\
                    • Set QUOTEBOOK_ROOT environment variable to your quote book path",
                    path.display()
                )
            }
            QuoteError::Validation(msg) => {
                format!(
                    "{}\n\n\
                    Example:\n\
                    quotebook add \"Stay hungry, stay foolish.\" --category Inspiration",
                    msg
                )
            }
            QuoteError::InvalidImport(msg) => {
                format!(
                    "Invalid import file: {}\n\n\
                    Expected a JSON array of quotes, e.g.:\n\
                    [{{\"text\": \"...\", \"category\": \"...\"}}]\n\
                    No quotes were imported.",
                    msg
                )
            }
            QuoteError::CorruptStore { path, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Fix or remove {} (it must be a JSON array of quotes)\n\
                    • Restore from a backup with 'quotebook import <file>'",
                    self,
                    path.display()
                )
            }
            QuoteError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: quotebook config fetch_limit 10",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using QuoteError
pub type Result<T> = std::result::Result<T, QuoteError>;
