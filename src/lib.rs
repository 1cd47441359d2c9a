// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::must_use_candidate)]

//! # sql-page-token
//!
//! Page tokens for offset-based SQL pagination.
//!
//! A client sends an optional page token and page size. This crate validates
//! them, computes the offset for a `LIMIT/OFFSET` query and, after the query
//! has run, decides whether a next-page token should go back to the client.
//!
//! ## Quick Start
//!
//! ```rust
//! use sql_page_token::{Page, PageConfig, Result};
//!
//! fn list_users(token: Option<&str>, size: Option<i64>) -> Result<Option<String>> {
//!     let config = PageConfig::new(20, 100)?;
//!     let page = Page::new(token, size, &config)?;
//!
//!     // SELECT ... ORDER BY id LIMIT {page.size()} OFFSET {page.offset()}
//!     let rows_returned = page.size();
//!     let total_rows = 45;
//!
//!     let page = page.with_total_count(total_rows);
//!     Ok(page.next_token(rows_returned))
//! }
//!
//! assert_eq!(list_users(None, None).unwrap(), Some("2".to_string()));
//! assert_eq!(list_users(Some("3"), None).unwrap(), None);
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Page size limits and their loaders
pub mod config;

/// Page tokens, offsets and next-page decisions
pub mod pagination;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{PageConfig, PaginationSettings};
pub use error::{Error, Result};
pub use pagination::{Page, PageInfo, PageRequest};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
