//! CLI module
//!
//! Command-line interface for planning paginated queries.
//!
//! # Commands
//!
//! - `plan` - Offset, next token and page count for a page
//! - `limits` - Page size limits in effect for an endpoint

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
