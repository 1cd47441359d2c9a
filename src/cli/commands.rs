//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Plan offset-paginated SQL queries from page tokens
#[derive(Parser, Debug)]
#[command(name = "sql-page-token")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pagination settings file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Endpoint whose page size limits apply
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// Override the default page size
    #[arg(long, global = true)]
    pub default_size: Option<u64>,

    /// Override the maximum page size
    #[arg(long, global = true)]
    pub max_size: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute offset, next token and page count for a page
    Plan {
        /// Page token from the request (defaults to the first page)
        #[arg(short, long, allow_hyphen_values = true)]
        token: Option<String>,

        /// Page size from the request (defaults to the configured default)
        #[arg(short, long, allow_negative_numbers = true)]
        size: Option<i64>,

        /// Rows the query returned for this page
        #[arg(short, long)]
        rows: Option<u64>,

        /// Total rows across all pages
        #[arg(long)]
        total: Option<u64>,
    },

    /// Show the page size limits in effect
    Limits,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one line)
    Json,
    /// Indented JSON
    Pretty,
}
