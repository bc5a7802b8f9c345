//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quotebook")]
#[command(about = "Random quotes with categories, JSON import/export and server sync", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new quote book
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Start without the starter quotes
        #[arg(long)]
        empty: bool,
    },

    /// Show a random quote (the default when no command is given)
    Show {
        /// Category to draw from ("all" for every quote); remembered for next time
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Add a new quote
    Add {
        /// Quote text
        text: String,

        /// Quote category
        #[arg(short, long)]
        category: String,
    },

    /// List quotes
    List {
        /// Only list quotes in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List the distinct categories
    Categories,

    /// Select the category filter and show the matching quotes
    Filter {
        /// Category name, or "all"
        category: String,
    },

    /// Import quotes from a JSON file
    Import {
        /// JSON file containing an array of quotes
        file: PathBuf,

        /// Skip quotes whose text is already in the book
        #[arg(long)]
        skip_duplicates: bool,
    },

    /// Export all quotes to a JSON file
    Export {
        /// Output file ("-" for stdout)
        #[arg(default_value = "quotes.json")]
        file: PathBuf,
    },

    /// Sync quotes with the server
    Sync {
        /// Keep syncing periodically
        #[arg(short, long)]
        watch: bool,

        /// Seconds between passes in watch mode (default: from config)
        #[arg(long, requires = "watch")]
        interval: Option<u64>,

        /// Stop after this many passes in watch mode
        #[arg(long, requires = "watch", value_parser = clap::value_parser!(u64).range(1..))]
        ticks: Option<u64>,

        /// Do not post local quotes back to the server
        #[arg(long)]
        no_push: bool,

        /// Show the result of the last sync and exit
        #[arg(long, conflicts_with_all = ["watch", "no_push"])]
        status: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
