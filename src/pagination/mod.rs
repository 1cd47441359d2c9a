//! Pagination module
//!
//! Page tokens for offset-based SQL pagination.
//!
//! # Overview
//!
//! A request carries an optional page token and page size. `Page` validates
//! them against a `PageConfig` and yields the offset for a `LIMIT/OFFSET`
//! query. After the query runs, the caller reports the total row count and
//! asks the page for the next token and page count.
//!
//! ```
//! use sql_page_token::config::PageConfig;
//! use sql_page_token::pagination::Page;
//!
//! let config = PageConfig::new(20, 100).unwrap();
//! let page = Page::new(Some("2"), None, &config).unwrap();
//! assert_eq!(page.offset(), 20);
//!
//! let page = page.with_total_count(41);
//! assert_eq!(page.next_token(20), Some("3".to_string()));
//! assert_eq!(page.pages_count(), 3);
//! ```

mod page;
mod types;

pub use page::Page;
pub use types::{PageInfo, PageRequest};

#[cfg(test)]
mod tests;
